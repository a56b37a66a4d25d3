//! Region set and reboot sequencer for the reactor reboot engine.
//!
//! A [`RegionSet`] keeps the lit cells as pairwise-disjoint cuboids; the
//! [`RebootSequencer`] feeds it an ordered list of toggle steps and reduces
//! the final set to a cell count.

pub mod region;
pub mod sequencer;

pub use region::{ApplyStats, RegionSet, DEFAULT_PARALLEL_THRESHOLD};
pub use sequencer::{run, RebootReport, RebootSequencer, SequencerConfig};
