//! Drives an ordered list of toggle steps through a [`RegionSet`].

use std::borrow::Borrow;

use reboot_core::{Result, ToggleStep};

use crate::region::{RegionSet, DEFAULT_PARALLEL_THRESHOLD};

/// Sequencer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequencerConfig {
    /// Minimum region size before slicing runs on the rayon pool.
    pub parallel_threshold: usize,
    /// Check the disjointness invariant after every step (quadratic).
    pub verify_disjoint: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            verify_disjoint: false,
        }
    }
}

impl SequencerConfig {
    /// Config that never slices in parallel.
    #[must_use]
    pub fn serial() -> Self {
        Self::default().with_parallel_threshold(usize::MAX)
    }

    /// Set the parallel slicing threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Enable or disable per-step disjointness checks.
    #[must_use]
    pub fn with_verify_disjoint(mut self, verify: bool) -> Self {
        self.verify_disjoint = verify;
        self
    }
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebootReport {
    /// Steps applied
    pub steps: usize,
    /// Cuboids in the final decomposition
    pub cuboids: usize,
    /// Lit cells after the last step
    pub volume: u64,
}

/// Applies toggle steps strictly in order and reduces the result.
#[derive(Clone, Debug, Default)]
pub struct RebootSequencer {
    config: SequencerConfig,
}

impl RebootSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Apply every step in order and return the final region.
    ///
    /// With `verify_disjoint` set, the first invariant violation aborts the
    /// run and no region is returned.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn run_region<I>(&self, steps: I) -> Result<RegionSet>
    where
        I: IntoIterator,
        I::Item: Borrow<ToggleStep>,
    {
        let mut region = RegionSet::with_parallel_threshold(self.config.parallel_threshold);
        for (index, step) in steps.into_iter().enumerate() {
            let step = step.borrow();
            region.apply(step);
            if self.config.verify_disjoint {
                region.verify_disjoint().inspect_err(|e| {
                    tracing::error!(step = index + 1, "{e}");
                })?;
            }
        }
        Ok(region)
    }

    /// Apply every step in order and return the number of lit cells.
    pub fn run<I>(&self, steps: I) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: Borrow<ToggleStep>,
    {
        self.run_report(steps).map(|report| report.volume)
    }

    /// Like [`run`](Self::run), with step and cuboid counts.
    pub fn run_report<I>(&self, steps: I) -> Result<RebootReport>
    where
        I: IntoIterator,
        I::Item: Borrow<ToggleStep>,
    {
        let mut count = 0;
        let region = self.run_region(steps.into_iter().inspect(|_| count += 1))?;
        let report = RebootReport {
            steps: count,
            cuboids: region.len(),
            volume: region.volume()?,
        };
        tracing::debug!(
            steps = report.steps,
            cuboids = report.cuboids,
            volume = report.volume,
            "reboot complete"
        );
        Ok(report)
    }
}

/// Run `steps` with the default configuration and return the lit volume.
pub fn run<I>(steps: I) -> Result<u64>
where
    I: IntoIterator,
    I::Item: Borrow<ToggleStep>,
{
    RebootSequencer::default().run(steps)
}
