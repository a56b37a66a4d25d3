//! Randomized checks of the cuboid engine against the brute-force oracle.

use reboot_core::{Cuboid, ToggleStep};
use reboot_region::{RebootSequencer, RegionSet, SequencerConfig};
use reboot_test::{assert_disjoint, brute_force_volume, cross_validate, StepGenerator};

const SEEDS: std::ops::Range<u64> = 0..40;

fn small_bounds() -> Cuboid {
    Cuboid::cube(-5, 5).unwrap()
}

#[test]
fn engine_matches_oracle_on_random_sequences() {
    for seed in SEEDS {
        let steps = StepGenerator::new(seed, small_bounds()).steps(25);
        if let Err(e) = cross_validate(&steps, small_bounds()) {
            panic!("seed {seed}: {e}");
        }
    }
}

#[test]
fn engine_matches_oracle_with_mostly_off_steps() {
    for seed in SEEDS {
        let steps = StepGenerator::new(seed, small_bounds())
            .with_off_probability(0.7)
            .steps(30);
        let volume = cross_validate(&steps, small_bounds()).unwrap();
        assert_eq!(volume, brute_force_volume(&steps, small_bounds()).unwrap());
    }
}

#[test]
fn parallel_slicing_matches_oracle() {
    let sequencer = RebootSequencer::new(
        SequencerConfig::default()
            .with_parallel_threshold(0)
            .with_verify_disjoint(true),
    );
    for seed in SEEDS {
        let steps = StepGenerator::new(seed, small_bounds()).steps(25);
        let oracle = brute_force_volume(&steps, small_bounds()).unwrap();
        assert_eq!(sequencer.run(&steps).unwrap(), oracle, "seed {seed}");
    }
}

#[test]
fn region_stays_disjoint_after_every_step() {
    for seed in SEEDS {
        let mut region = RegionSet::new();
        for step in StepGenerator::new(seed, small_bounds()).take(40) {
            region.apply(&step);
            assert_disjoint(&region);
        }
    }
}

#[test]
fn subtract_reconstructs_the_minuend() {
    let mut generator = StepGenerator::new(99, small_bounds());
    for _ in 0..500 {
        let a = generator.next_cuboid();
        let base = generator.next_cuboid();
        let slices = a.subtract(&base);

        let overlap = a.intersection(&base).map_or(0, |c| c.volume().unwrap());
        let sliced: u64 = slices.iter().map(|s| s.volume().unwrap()).sum();
        assert_eq!(sliced + overlap, a.volume().unwrap(), "{a} minus {base}");
        assert!(slices.len() <= 6);

        // Every cell of `a` is in exactly one place: a slice or the overlap.
        for x in a.x().from()..=a.x().to() {
            for y in a.y().from()..=a.y().to() {
                for z in a.z().from()..=a.z().to() {
                    let p = [x, y, z];
                    let holders = slices.iter().filter(|s| s.contains_point(p)).count();
                    let expected = usize::from(!base.contains_point(p));
                    assert_eq!(holders, expected, "{p:?} in {a} minus {base}");
                }
            }
        }
    }
}

#[test]
fn repeated_on_is_idempotent() {
    let mut generator = StepGenerator::new(5, small_bounds());
    for _ in 0..50 {
        let prefix = generator.steps(10);
        let step = ToggleStep::on(generator.next_cuboid());

        let mut once = prefix;
        once.push(step);
        let mut twice = once.clone();
        twice.push(step);

        assert_eq!(
            reboot_region::run(&once).unwrap(),
            reboot_region::run(&twice).unwrap()
        );
    }
}

#[test]
fn on_then_off_of_fresh_cells_cancels() {
    let mut generator = StepGenerator::new(11, small_bounds());
    let far = Cuboid::from_bounds([100, 100, 100], [104, 107, 103]).unwrap();
    for _ in 0..50 {
        let mut steps = generator.steps(12);
        let before = reboot_region::run(&steps).unwrap();
        steps.push(ToggleStep::on(far));
        steps.push(ToggleStep::off(far));
        assert_eq!(reboot_region::run(&steps).unwrap(), before);
    }
}

#[test]
fn order_is_significant() {
    let a = ToggleStep::on(Cuboid::cube(0, 4).unwrap());
    let b = ToggleStep::off(Cuboid::cube(2, 6).unwrap());
    let forward = reboot_region::run([a, b]).unwrap();
    let backward = reboot_region::run([b, a]).unwrap();
    assert_eq!(forward, 125 - 27);
    assert_eq!(backward, 125);
    assert_ne!(forward, backward);
}

#[test]
fn large_coordinates_without_enumeration() {
    let steps = [
        ToggleStep::on(Cuboid::cube(-100_000, 99_999).unwrap()),
        ToggleStep::off(Cuboid::cube(0, 99_999).unwrap()),
        ToggleStep::on(Cuboid::from_bounds([-100_000, -100_000, 0], [-1, -1, 0]).unwrap()),
    ];
    // 200k^3 - 100k^3; the last step lies entirely in cells that are still lit.
    assert_eq!(
        reboot_region::run(&steps).unwrap(),
        8_000_000_000_000_000 - 1_000_000_000_000_000
    );
}
