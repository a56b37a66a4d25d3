//! Test support for the reactor reboot engine.
//!
//! Provides a brute-force cell oracle, seeded random step generation and
//! invariant checks for cross-validating the cuboid engine.

pub mod generator;
pub mod harness;

pub use generator::StepGenerator;
pub use harness::{
    assert_disjoint, brute_force_volume, cross_validate, BruteForceCore, MAX_ORACLE_VOLUME,
};

use reboot_core::{Cuboid, ToggleStep};
use thiserror::Error;

/// Test-support error type.
#[derive(Error, Debug)]
pub enum TestError {
    /// Step reaching outside the oracle's bounding cube
    #[error("Step {step} leaves oracle bounds {bounds}")]
    OutOfBounds { step: ToggleStep, bounds: Cuboid },

    /// Bounding cube too large to enumerate cell by cell
    #[error("Oracle bounds {0} exceed {max} cells", max = MAX_ORACLE_VOLUME)]
    TooLarge(Cuboid),

    /// Error raised by the engine itself
    #[error("Engine error: {0}")]
    Engine(#[from] reboot_core::Error),

    /// Engine and oracle disagree on a cell
    #[error("Cell {point:?} is {engine} in the engine but {oracle} in the oracle")]
    CellMismatch {
        point: [i64; 3],
        engine: bool,
        oracle: bool,
    },

    /// Engine and oracle disagree on the total volume
    #[error("Volume mismatch: engine {engine}, oracle {oracle}")]
    VolumeMismatch { engine: u64, oracle: u64 },
}

/// Result type alias using [`TestError`].
pub type Result<T> = std::result::Result<T, TestError>;
