//! Step sources for the reactor reboot engine.
//!
//! Turns external representations of a reboot sequence into the ordered
//! [`ToggleStep`](reboot_core::ToggleStep) list the engine consumes:
//! - Line-oriented text (`on x=10..12,y=10..12,z=10..12`)
//! - JSON arrays of serialized steps
//! - Filtering down to the initialization region

pub mod error;
pub mod init;
pub mod json;
pub mod text;

pub use error::{ParseError, Result};
pub use init::{initialization_steps, is_initialization, INITIALIZATION_BOUND, INITIALIZATION_REGION};
pub use json::{parse_json_steps, to_json};
pub use reboot_core::{parse_cuboid, parse_polarity, parse_step, SyntaxError};
pub use text::parse_steps;

use reboot_core::ToggleStep;

/// Input formats a step list can be read from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepFormat {
    /// One `on|off x=..,y=..,z=..` step per line
    #[default]
    Text,
    /// JSON array of steps
    Json,
}

impl StepFormat {
    /// Parse `input` in this format.
    pub fn parse(self, input: &str) -> Result<Vec<ToggleStep>> {
        match self {
            Self::Text => parse_steps(input),
            Self::Json => parse_json_steps(input),
        }
    }
}
