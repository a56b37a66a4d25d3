//! JSON step lists.
//!
//! The document is an array of steps in the shape `reboot-core` serializes
//! them to:
//!
//! ```json
//! [{"polarity": "on", "cuboid": {"x": {"from": 10, "to": 12}, "y": ..., "z": ...}}]
//! ```
//!
//! Interval bounds are validated while deserializing.

use reboot_core::ToggleStep;

use crate::error::Result;

/// Parse a JSON array of steps.
pub fn parse_json_steps(input: &str) -> Result<Vec<ToggleStep>> {
    let steps: Vec<ToggleStep> = serde_json::from_str(input)?;
    tracing::debug!(steps = steps.len(), "parsed json steps");
    Ok(steps)
}

/// Serialize steps to the JSON form read by [`parse_json_steps`].
pub fn to_json(steps: &[ToggleStep]) -> Result<String> {
    Ok(serde_json::to_string_pretty(steps)?)
}
