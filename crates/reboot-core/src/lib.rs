//! Core geometry types for the reactor reboot engine.
//!
//! This crate provides the value types every other crate builds on:
//! - Inclusive axis intervals and the `x`, `y`, `z` axes
//! - Integer cuboids with intersection, volume and slicing
//! - Toggle steps pairing a polarity with a cuboid
//! - The `on x=a..b,y=c..d,z=e..f` step grammar, via `FromStr`
//! - The engine-wide error type

pub mod cuboid;
pub mod error;
pub mod interval;
pub mod parse;
pub mod step;

pub use cuboid::Cuboid;
pub use error::{Error, Result};
pub use interval::{Axis, AxisInterval};
pub use parse::{parse_cuboid, parse_polarity, parse_step, SyntaxError};
pub use step::{Polarity, ToggleStep};
