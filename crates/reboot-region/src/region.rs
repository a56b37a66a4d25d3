//! Disjoint cuboid decomposition of the lit cells.
//!
//! The region never stores two cuboids that share a cell, so its volume is
//! the plain sum of its members. Every [`RegionSet::apply`] carves the
//! incoming cuboid out of each member before (optionally) inserting it.

use rayon::prelude::*;
use reboot_core::{Cuboid, Error, Result, ToggleStep};

/// Default minimum member count before slicing fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// What happened to the members of a region during one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Members untouched by the step
    pub kept: usize,
    /// Members that overlapped the step and were sliced
    pub sliced: usize,
    /// Replacement pieces produced by slicing
    pub pieces: usize,
    /// Whether the step's own cuboid was inserted
    pub inserted: bool,
}

/// Result of carving one member against an incoming cuboid.
enum Carved {
    Kept(Cuboid),
    Sliced(Vec<Cuboid>),
}

impl Carved {
    #[inline]
    fn of(member: &Cuboid, incoming: &Cuboid) -> Self {
        if member.intersects(incoming) {
            Self::Sliced(member.subtract(incoming))
        } else {
            Self::Kept(*member)
        }
    }

    fn push_into(self, working: &mut Vec<Cuboid>, stats: &mut ApplyStats) {
        match self {
            Self::Kept(cuboid) => {
                stats.kept += 1;
                working.push(cuboid);
            }
            Self::Sliced(pieces) => {
                stats.sliced += 1;
                stats.pieces += pieces.len();
                working.extend(pieces);
            }
        }
    }
}

/// Set of pairwise-disjoint cuboids describing every lit cell.
#[derive(Clone, Debug)]
pub struct RegionSet {
    cuboids: Vec<Cuboid>,
    parallel_threshold: usize,
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionSet {
    /// Create an empty region.
    pub const fn new() -> Self {
        Self {
            cuboids: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create an empty region that slices in parallel once it holds at
    /// least `threshold` members. `usize::MAX` keeps slicing serial.
    #[must_use]
    pub const fn with_parallel_threshold(threshold: usize) -> Self {
        Self {
            cuboids: Vec::new(),
            parallel_threshold: threshold,
        }
    }

    /// Build a region from existing cuboids, checking that none overlap.
    pub fn from_disjoint(cuboids: Vec<Cuboid>) -> Result<Self> {
        let region = Self {
            cuboids,
            ..Self::new()
        };
        region.verify_disjoint()?;
        Ok(region)
    }

    /// Member count at which slicing switches to the thread pool.
    pub const fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Apply one toggle step.
    ///
    /// Every member overlapping the step's cuboid is replaced by the pieces
    /// of it lying outside that cuboid; on `On` steps the cuboid itself is
    /// then added. The new member list is assembled separately and swapped
    /// in only once complete.
    #[tracing::instrument(level = "trace", skip_all, fields(step = %step))]
    pub fn apply(&mut self, step: &ToggleStep) -> ApplyStats {
        let incoming = step.cuboid;
        let mut stats = ApplyStats::default();
        let mut working = Vec::with_capacity(self.cuboids.len() + 1);

        if self.cuboids.len() >= self.parallel_threshold {
            let carved: Vec<Carved> = self
                .cuboids
                .par_iter()
                .map(|member| Carved::of(member, &incoming))
                .collect();
            for c in carved {
                c.push_into(&mut working, &mut stats);
            }
        } else {
            for member in &self.cuboids {
                Carved::of(member, &incoming).push_into(&mut working, &mut stats);
            }
        }

        if step.polarity.is_on() {
            working.push(incoming);
            stats.inserted = true;
        }

        self.cuboids = working;
        tracing::trace!(
            kept = stats.kept,
            sliced = stats.sliced,
            pieces = stats.pieces,
            members = self.cuboids.len(),
            "step applied"
        );
        stats
    }

    /// Total number of lit cells.
    pub fn volume(&self) -> Result<u64> {
        self.cuboids.iter().try_fold(0u64, |total, cuboid| {
            total
                .checked_add(cuboid.volume()?)
                .ok_or(Error::VolumeOverflow)
        })
    }

    /// Check every pair of members for overlap.
    ///
    /// This is quadratic in the member count.
    pub fn verify_disjoint(&self) -> Result<()> {
        for (i, first) in self.cuboids.iter().enumerate() {
            if let Some(second) = self.cuboids[i + 1..].iter().find(|c| first.intersects(c)) {
                return Err(Error::Overlap {
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(())
    }

    /// Returns true if the given cell is lit
    pub fn contains_point(&self, point: [i64; 3]) -> bool {
        self.cuboids.iter().any(|c| c.contains_point(point))
    }

    /// Current members, in insertion order
    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cuboid> {
        self.cuboids.iter()
    }

    pub fn len(&self) -> usize {
        self.cuboids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuboids.is_empty()
    }

    pub fn into_cuboids(self) -> Vec<Cuboid> {
        self.cuboids
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Cuboid;
    type IntoIter = std::slice::Iter<'a, Cuboid>;

    fn into_iter(self) -> Self::IntoIter {
        self.cuboids.iter()
    }
}
