//! Seeded random step sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reboot_core::{Axis, AxisInterval, Cuboid, Polarity, ToggleStep};

/// Generates random toggle steps whose cuboids lie inside fixed bounds.
///
/// The same seed always yields the same sequence.
#[derive(Clone, Debug)]
pub struct StepGenerator {
    rng: StdRng,
    bounds: Cuboid,
    off_probability: f64,
}

impl StepGenerator {
    pub fn new(seed: u64, bounds: Cuboid) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bounds,
            off_probability: 0.3,
        }
    }

    /// Set the chance that a generated step is `off` (clamped to `0..=1`).
    #[must_use]
    pub fn with_off_probability(mut self, probability: f64) -> Self {
        self.off_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn bounds(&self) -> Cuboid {
        self.bounds
    }

    /// Random cuboid inside the bounds.
    pub fn next_cuboid(&mut self) -> Cuboid {
        let mut cuboid = self.bounds;
        for axis in Axis::ALL {
            let span = self.bounds.axis(axis);
            let a = self.rng.random_range(span.from()..=span.to());
            let b = self.rng.random_range(span.from()..=span.to());
            let interval = AxisInterval::new(a.min(b), a.max(b))
                .unwrap_or_else(|_| unreachable!("min <= max"));
            cuboid = cuboid.with_axis(axis, interval);
        }
        cuboid
    }

    pub fn next_step(&mut self) -> ToggleStep {
        let polarity = if self.rng.random_bool(self.off_probability) {
            Polarity::Off
        } else {
            Polarity::On
        };
        ToggleStep::new(polarity, self.next_cuboid())
    }

    /// `count` consecutive steps.
    pub fn steps(&mut self, count: usize) -> Vec<ToggleStep> {
        self.by_ref().take(count).collect()
    }
}

impl Iterator for StepGenerator {
    type Item = ToggleStep;

    fn next(&mut self) -> Option<ToggleStep> {
        Some(self.next_step())
    }
}
