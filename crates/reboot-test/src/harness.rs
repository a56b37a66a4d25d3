//! Brute-force oracle for cross-validating the cuboid engine.
//!
//! The oracle tracks every lit cell individually inside a small bounding
//! cube, the way a naive reboot would. It is only usable for tiny inputs and
//! exists purely to check [`RegionSet`] against.

use hashbrown::HashSet;
use reboot_core::{Cuboid, ToggleStep};
use reboot_region::{RegionSet, RebootSequencer, SequencerConfig};

use crate::{Result, TestError};

/// Largest bounding cube the oracle accepts, in cells.
pub const MAX_ORACLE_VOLUME: u64 = 1 << 24;

/// Cell-by-cell reboot restricted to a bounding cube.
#[derive(Clone, Debug)]
pub struct BruteForceCore {
    bounds: Cuboid,
    lit: HashSet<[i64; 3]>,
}

impl BruteForceCore {
    /// Create an empty oracle over `bounds`.
    pub fn new(bounds: Cuboid) -> Result<Self> {
        match bounds.checked_volume() {
            Some(volume) if volume <= MAX_ORACLE_VOLUME => Ok(Self {
                bounds,
                lit: HashSet::new(),
            }),
            _ => Err(TestError::TooLarge(bounds)),
        }
    }

    pub fn bounds(&self) -> Cuboid {
        self.bounds
    }

    /// Switch every cell of the step on or off.
    pub fn apply(&mut self, step: &ToggleStep) -> Result<()> {
        if !self.bounds.contains(&step.cuboid) {
            return Err(TestError::OutOfBounds {
                step: *step,
                bounds: self.bounds,
            });
        }

        let c = step.cuboid;
        for x in c.x().from()..=c.x().to() {
            for y in c.y().from()..=c.y().to() {
                for z in c.z().from()..=c.z().to() {
                    if step.polarity.is_on() {
                        self.lit.insert([x, y, z]);
                    } else {
                        self.lit.remove(&[x, y, z]);
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true if the cell is lit
    pub fn is_lit(&self, point: [i64; 3]) -> bool {
        self.lit.contains(&point)
    }

    /// Number of lit cells
    pub fn count(&self) -> u64 {
        self.lit.len() as u64
    }
}

/// Count lit cells after `steps` by literal enumeration.
pub fn brute_force_volume(steps: &[ToggleStep], bounds: Cuboid) -> Result<u64> {
    let mut core = BruteForceCore::new(bounds)?;
    for step in steps {
        core.apply(step)?;
    }
    Ok(core.count())
}

/// Run `steps` through both the engine and the oracle and compare every
/// cell of `bounds`. Returns the agreed volume.
pub fn cross_validate(steps: &[ToggleStep], bounds: Cuboid) -> Result<u64> {
    let mut oracle = BruteForceCore::new(bounds)?;
    for step in steps {
        oracle.apply(step)?;
    }

    let region = RebootSequencer::new(SequencerConfig::default().with_verify_disjoint(true))
        .run_region(steps)?;

    for x in bounds.x().from()..=bounds.x().to() {
        for y in bounds.y().from()..=bounds.y().to() {
            for z in bounds.z().from()..=bounds.z().to() {
                let point = [x, y, z];
                let engine = region.contains_point(point);
                let expected = oracle.is_lit(point);
                if engine != expected {
                    return Err(TestError::CellMismatch {
                        point,
                        engine,
                        oracle: expected,
                    });
                }
            }
        }
    }

    let engine = region.volume()?;
    if engine != oracle.count() {
        return Err(TestError::VolumeMismatch {
            engine,
            oracle: oracle.count(),
        });
    }
    tracing::trace!(steps = steps.len(), cuboids = region.len(), volume = engine, "cross-validated");
    Ok(engine)
}

/// Panic naming the first pair of overlapping members.
#[track_caller]
pub fn assert_disjoint(region: &RegionSet) {
    if let Err(e) = region.verify_disjoint() {
        panic!("region is not disjoint: {e}");
    }
}
