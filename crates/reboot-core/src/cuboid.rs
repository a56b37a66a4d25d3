//! Axis-aligned integer cuboids and the slicing operations on them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interval::{Axis, AxisInterval};

/// Axis-aligned box of lattice cells, inclusive on every face.
///
/// A plain value of six integers: equality and hashing are structural, and
/// every operation returns new values instead of mutating in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuboid {
    x: AxisInterval,
    y: AxisInterval,
    z: AxisInterval,
}

impl Cuboid {
    /// Create a cuboid from one interval per axis
    #[inline]
    pub const fn new(x: AxisInterval, y: AxisInterval, z: AxisInterval) -> Self {
        Self { x, y, z }
    }

    /// Create a cuboid from its minimum and maximum corners (both inclusive).
    ///
    /// Fails with [`Error::InvalidCuboid`] naming the first axis whose
    /// bounds are inverted.
    pub fn from_bounds(min: [i64; 3], max: [i64; 3]) -> Result<Self> {
        let mut axes = [AxisInterval::point(0); 3];
        for axis in Axis::ALL {
            let i = axis.index();
            axes[i] = AxisInterval::new(min[i], max[i]).map_err(|_| Error::InvalidCuboid {
                axis,
                from: min[i],
                to: max[i],
            })?;
        }
        Ok(Self::new(axes[0], axes[1], axes[2]))
    }

    /// Cube spanning `from..=to` on all three axes.
    pub fn cube(from: i64, to: i64) -> Result<Self> {
        Self::from_bounds([from; 3], [to; 3])
    }

    /// Single-cell cuboid at the given lattice point.
    #[inline]
    pub const fn cell(point: [i64; 3]) -> Self {
        Self::new(
            AxisInterval::point(point[0]),
            AxisInterval::point(point[1]),
            AxisInterval::point(point[2]),
        )
    }

    #[inline]
    pub const fn x(&self) -> AxisInterval {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> AxisInterval {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> AxisInterval {
        self.z
    }

    /// Interval along the given axis.
    #[inline]
    pub const fn axis(&self, axis: Axis) -> AxisInterval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy of this cuboid with one axis replaced.
    #[inline]
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis, interval: AxisInterval) -> Self {
        match axis {
            Axis::X => self.x = interval,
            Axis::Y => self.y = interval,
            Axis::Z => self.z = interval,
        }
        self
    }

    /// Minimum corner
    #[inline]
    pub const fn min(&self) -> [i64; 3] {
        [self.x.from(), self.y.from(), self.z.from()]
    }

    /// Maximum corner (inclusive)
    #[inline]
    pub const fn max(&self) -> [i64; 3] {
        [self.x.to(), self.y.to(), self.z.to()]
    }

    /// Check if this cuboid shares at least one cell with another.
    ///
    /// Cuboids that only touch along a face do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x.overlaps(other.x) && self.y.overlaps(other.y) && self.z.overlaps(other.z)
    }

    /// Shared part of two cuboids, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            self.x.intersection(other.x)?,
            self.y.intersection(other.y)?,
            self.z.intersection(other.z)?,
        ))
    }

    /// Check if `other` lies entirely inside this cuboid
    #[inline]
    pub const fn contains(&self, other: &Self) -> bool {
        self.x.contains_interval(other.x)
            && self.y.contains_interval(other.y)
            && self.z.contains_interval(other.z)
    }

    /// Check if a lattice point lies inside this cuboid
    #[inline]
    pub const fn contains_point(&self, point: [i64; 3]) -> bool {
        self.x.contains(point[0]) && self.y.contains(point[1]) && self.z.contains(point[2])
    }

    /// Number of cells, or `None` if the product does not fit in a `u64`.
    pub fn checked_volume(&self) -> Option<u64> {
        self.x
            .checked_len()?
            .checked_mul(self.y.checked_len()?)?
            .checked_mul(self.z.checked_len()?)
    }

    /// Number of cells covered by this cuboid.
    pub fn volume(&self) -> Result<u64> {
        self.checked_volume().ok_or(Error::VolumeOverflow)
    }

    /// Cells of `self` lying outside `base`, as at most six disjoint cuboids.
    ///
    /// Axes are clipped in x, y, z order. On each axis the part of the
    /// remaining core below `base` and the part above it are emitted as
    /// slices, then the core shrinks to `base`'s extent on that axis. Slices
    /// keep the already-shrunk extent on earlier axes and the full extent on
    /// later ones, which makes them pairwise disjoint. What is left of the
    /// core at the end is `self ∩ base` and is dropped.
    ///
    /// Returns `[self]` unchanged when the two do not intersect.
    pub fn subtract(&self, base: &Self) -> Vec<Self> {
        if !self.intersects(base) {
            return vec![*self];
        }

        let mut slices = Vec::with_capacity(6);
        let mut core = *self;
        for axis in Axis::ALL {
            let span = core.axis(axis);
            let limit = base.axis(axis);

            if span.from() < limit.from() {
                let below = AxisInterval::new_unchecked(span.from(), limit.from() - 1);
                slices.push(core.with_axis(axis, below));
            }
            if span.to() > limit.to() {
                let above = AxisInterval::new_unchecked(limit.to() + 1, span.to());
                slices.push(core.with_axis(axis, above));
            }

            let clipped = AxisInterval::new_unchecked(
                span.from().max(limit.from()),
                span.to().min(limit.to()),
            );
            core = core.with_axis(axis, clipped);
        }

        debug_assert_eq!(Some(core), self.intersection(base));
        slices
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={},y={},z={}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuboid(min: [i64; 3], max: [i64; 3]) -> Cuboid {
        Cuboid::from_bounds(min, max).unwrap()
    }

    fn total(slices: &[Cuboid]) -> u64 {
        slices.iter().map(|c| c.volume().unwrap()).sum()
    }

    #[test]
    fn from_bounds_names_bad_axis() {
        assert_eq!(
            Cuboid::from_bounds([0, 5, 0], [1, 4, 1]),
            Err(Error::InvalidCuboid {
                axis: Axis::Y,
                from: 5,
                to: 4
            })
        );
    }

    #[test]
    fn volume_is_inclusive() {
        assert_eq!(Cuboid::cell([3, -4, 5]).volume(), Ok(1));
        assert_eq!(Cuboid::cube(10, 12).unwrap().volume(), Ok(27));
        assert_eq!(cuboid([0, 0, 0], [1, 2, 3]).volume(), Ok(24));
    }

    #[test]
    fn volume_handles_large_coordinates() {
        let big = Cuboid::cube(-100_000, 99_999).unwrap();
        assert_eq!(big.volume(), Ok(8_000_000_000_000_000));
    }

    #[test]
    fn volume_overflow_is_reported() {
        let huge = Cuboid::cube(0, i64::MAX).unwrap();
        assert_eq!(huge.checked_volume(), None);
        assert_eq!(huge.volume(), Err(Error::VolumeOverflow));
    }

    #[test]
    fn touching_faces_do_not_intersect() {
        let a = cuboid([0, 0, 0], [4, 4, 4]);
        let b = cuboid([5, 0, 0], [9, 4, 4]);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn overlap_on_two_axes_only_is_not_intersection() {
        let a = cuboid([0, 0, 0], [4, 4, 4]);
        let b = cuboid([2, 2, 10], [6, 6, 12]);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn intersection_and_containment() {
        let a = cuboid([0, 0, 0], [4, 4, 4]);
        let b = cuboid([3, -2, 1], [8, 2, 1]);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Some(cuboid([3, 0, 1], [4, 2, 1])));
        assert!(a.contains(&cuboid([1, 1, 1], [4, 4, 4])));
        assert!(!a.contains(&b));
        assert!(a.contains_point([4, 0, 2]));
        assert!(!a.contains_point([5, 0, 2]));
    }

    #[test]
    fn subtract_disjoint_returns_self() {
        let a = cuboid([0, 0, 0], [1, 1, 1]);
        let b = cuboid([5, 5, 5], [6, 6, 6]);
        assert_eq!(a.subtract(&b), vec![a]);
    }

    #[test]
    fn subtract_covering_base_returns_nothing() {
        let a = cuboid([1, 1, 1], [2, 2, 2]);
        let b = cuboid([0, 0, 0], [3, 3, 3]);
        assert!(a.subtract(&b).is_empty());
        assert!(a.subtract(&a).is_empty());
    }

    #[test]
    fn subtract_centre_hole_yields_six_slices() {
        let a = cuboid([0, 0, 0], [2, 2, 2]);
        let hole = Cuboid::cell([1, 1, 1]);
        let slices = a.subtract(&hole);

        assert_eq!(
            slices,
            vec![
                cuboid([0, 0, 0], [0, 2, 2]),
                cuboid([2, 0, 0], [2, 2, 2]),
                cuboid([1, 0, 0], [1, 0, 2]),
                cuboid([1, 2, 0], [1, 2, 2]),
                cuboid([1, 1, 0], [1, 1, 0]),
                cuboid([1, 1, 2], [1, 1, 2]),
            ]
        );
        assert_eq!(total(&slices), 26);
    }

    #[test]
    fn subtract_corner_overlap() {
        let a = Cuboid::cube(10, 12).unwrap();
        let base = Cuboid::cube(9, 11).unwrap();
        let slices = a.subtract(&base);

        assert_eq!(
            slices,
            vec![
                cuboid([12, 10, 10], [12, 12, 12]),
                cuboid([10, 12, 10], [11, 12, 12]),
                cuboid([10, 10, 12], [11, 11, 12]),
            ]
        );
        assert_eq!(total(&slices), 27 - 8);
    }

    #[test]
    fn subtract_pieces_are_disjoint_and_conserve_volume() {
        let a = cuboid([-3, 0, 2], [4, 6, 9]);
        let bases = [
            cuboid([-1, 1, 3], [2, 4, 5]),
            cuboid([-10, -10, -10], [0, 3, 4]),
            cuboid([4, 6, 9], [20, 20, 20]),
            cuboid([-3, 0, 2], [-3, 6, 9]),
            cuboid([0, -5, 0], [1, 50, 50]),
        ];

        for base in bases {
            let slices = a.subtract(&base);
            let overlap = a.intersection(&base).map_or(0, |c| c.volume().unwrap());
            assert_eq!(total(&slices) + overlap, a.volume().unwrap(), "base {base}");

            for (i, s) in slices.iter().enumerate() {
                assert!(a.contains(s), "{s} escapes {a}");
                assert!(!s.intersects(&base), "{s} overlaps base {base}");
                for t in &slices[i + 1..] {
                    assert!(!s.intersects(t), "{s} overlaps {t}");
                }
            }
        }
    }

    #[test]
    fn display_matches_step_syntax() {
        let a = cuboid([-5, 0, 3], [5, 0, 7]);
        assert_eq!(a.to_string(), "x=-5..5,y=0..0,z=3..7");
    }

    #[test]
    fn serde_roundtrip_keeps_structure() {
        let a = cuboid([-5, 0, 3], [5, 0, 7]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(
            json,
            r#"{"x":{"from":-5,"to":5},"y":{"from":0,"to":0},"z":{"from":3,"to":7}}"#
        );
        let back: Cuboid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
