//! Line-oriented text steps: `on x=10..12,y=10..12,z=10..12`.
//!
//! The grammar of a single line lives with the core types (see
//! [`reboot_core::parse`]); this module handles whole files.

use reboot_core::ToggleStep;

use crate::error::{ParseError, Result};

/// Parse a whole step file, one step per line. Blank lines are skipped.
///
/// Errors carry the 1-based line number they were found on.
pub fn parse_steps(input: &str) -> Result<Vec<ToggleStep>> {
    let steps = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.parse::<ToggleStep>().map_err(|source| ParseError::Line {
                line: index + 1,
                source: Box::new(source.into()),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(steps = steps.len(), "parsed text steps");
    Ok(steps)
}
