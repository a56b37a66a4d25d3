//! Error types for the reboot engine.

use thiserror::Error;

use crate::cuboid::Cuboid;
use crate::interval::Axis;

/// Engine-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Interval whose lower bound lies above its upper bound
    #[error("Invalid interval: {from}..{to} (from > to)")]
    InvalidInterval { from: i64, to: i64 },

    /// Cuboid assembled from a malformed axis
    #[error("Invalid cuboid: axis {axis} spans {from}..{to} (from > to)")]
    InvalidCuboid { axis: Axis, from: i64, to: i64 },

    /// Volume does not fit in a `u64`
    #[error("Volume overflow: result exceeds {}", u64::MAX)]
    VolumeOverflow,

    /// Two members of a region share at least one cell
    #[error("Overlapping cuboids in region: {first} and {second}")]
    Overlap { first: Cuboid, second: Cuboid },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
