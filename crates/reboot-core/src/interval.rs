//! Inclusive integer intervals along a single axis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the three spatial axes.
///
/// Slicing always walks the axes in declaration order: x, then y, then z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in processing order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Lowercase axis name as written in step files.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Position of this axis in `[x, y, z]` arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive range `[from, to]` on one axis.
///
/// The invariant `from <= to` is enforced on construction and on
/// deserialization, so every value of this type spans at least one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct AxisInterval {
    from: i64,
    to: i64,
}

impl AxisInterval {
    /// Create a new interval, rejecting `from > to`.
    pub const fn new(from: i64, to: i64) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidInterval { from, to });
        }
        Ok(Self { from, to })
    }

    /// Interval covering a single coordinate.
    #[inline]
    pub const fn point(at: i64) -> Self {
        Self { from: at, to: at }
    }

    /// Callers must guarantee `from <= to`.
    #[inline]
    pub(crate) const fn new_unchecked(from: i64, to: i64) -> Self {
        debug_assert!(from <= to);
        Self { from, to }
    }

    /// Lower bound (inclusive)
    #[inline]
    pub const fn from(self) -> i64 {
        self.from
    }

    /// Upper bound (inclusive)
    #[inline]
    pub const fn to(self) -> i64 {
        self.to
    }

    /// Number of cells covered, or `None` if it does not fit in a `u64`.
    ///
    /// Only the full `i64` range overflows.
    #[inline]
    pub const fn checked_len(self) -> Option<u64> {
        self.to.abs_diff(self.from).checked_add(1)
    }

    /// Returns true if `value` lies within the interval
    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        self.from <= value && value <= self.to
    }

    /// Returns true if `other` lies entirely within this interval
    #[inline]
    pub const fn contains_interval(self, other: Self) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    /// Returns true if the two intervals share at least one coordinate.
    ///
    /// Adjacent intervals such as `0..4` and `5..9` do not overlap.
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        self.from.max(other.from) <= self.to.min(other.to)
    }

    /// Shared part of two intervals, if any.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let from = self.from.max(other.from);
        let to = self.to.min(other.to);
        (from <= to).then_some(Self { from, to })
    }
}

impl fmt::Display for AxisInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Unvalidated wire form of [`AxisInterval`].
#[derive(Deserialize)]
struct RawInterval {
    from: i64,
    to: i64,
}

impl TryFrom<RawInterval> for AxisInterval {
    type Error = Error;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.from, raw.to)
    }
}
