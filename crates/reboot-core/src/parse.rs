//! Step-file grammar: `on x=10..12,y=10..12,z=10..12`.
//!
//! [`Polarity`], [`Cuboid`] and [`ToggleStep`] all implement [`FromStr`]
//! with this grammar, so `"off x=1..2,y=1..2,z=1..2".parse::<ToggleStep>()`
//! works anywhere the core types are in scope.

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::cuboid::Cuboid;
use crate::interval::Axis;
use crate::step::{Polarity, ToggleStep};

/// Malformed step text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// First word is neither `on` nor `off`
    #[error("Unknown polarity {0:?} (expected \"on\" or \"off\")")]
    UnknownPolarity(String),

    /// Polarity with nothing after it
    #[error("Missing cuboid after polarity")]
    MissingCuboid,

    /// Axis name other than `x`, `y` or `z`
    #[error("Unknown axis {0:?}")]
    UnknownAxis(String),

    /// Same axis given twice in one step
    #[error("Duplicate axis {0}")]
    DuplicateAxis(Axis),

    /// Axis absent from a step
    #[error("Missing axis {0}")]
    MissingAxis(Axis),

    /// Range not of the form `axis=from..to`
    #[error("Malformed range {0:?} (expected axis=from..to)")]
    MalformedRange(String),

    /// Bound that is not a signed 64-bit integer
    #[error("Invalid number {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Well-formed syntax describing an invalid cuboid
    #[error(transparent)]
    Geometry(#[from] crate::Error),
}

/// Parse a polarity keyword.
pub fn parse_polarity(word: &str) -> Result<Polarity, SyntaxError> {
    match word {
        "on" => Ok(Polarity::On),
        "off" => Ok(Polarity::Off),
        other => Err(SyntaxError::UnknownPolarity(other.to_string())),
    }
}

fn parse_axis(name: &str) -> Result<Axis, SyntaxError> {
    Axis::ALL
        .into_iter()
        .find(|axis| axis.name() == name)
        .ok_or_else(|| SyntaxError::UnknownAxis(name.to_string()))
}

fn parse_bound(text: &str) -> Result<i64, SyntaxError> {
    let text = text.trim();
    text.parse().map_err(|source| SyntaxError::InvalidNumber {
        text: text.to_string(),
        source,
    })
}

/// Parse `x=a..b,y=c..d,z=e..f`. Axes may come in any order, each once.
pub fn parse_cuboid(text: &str) -> Result<Cuboid, SyntaxError> {
    let mut bounds: [Option<(i64, i64)>; 3] = [None; 3];

    for part in text.split(',') {
        let part = part.trim();
        let (name, range) = part
            .split_once('=')
            .ok_or_else(|| SyntaxError::MalformedRange(part.to_string()))?;
        let axis = parse_axis(name.trim())?;
        let (from, to) = range
            .split_once("..")
            .ok_or_else(|| SyntaxError::MalformedRange(part.to_string()))?;

        let slot = &mut bounds[axis.index()];
        if slot.is_some() {
            return Err(SyntaxError::DuplicateAxis(axis));
        }
        *slot = Some((parse_bound(from)?, parse_bound(to)?));
    }

    let mut min = [0; 3];
    let mut max = [0; 3];
    for axis in Axis::ALL {
        let (from, to) = bounds[axis.index()].ok_or(SyntaxError::MissingAxis(axis))?;
        min[axis.index()] = from;
        max[axis.index()] = to;
    }
    Ok(Cuboid::from_bounds(min, max)?)
}

/// Parse a single step line.
pub fn parse_step(line: &str) -> Result<ToggleStep, SyntaxError> {
    let line = line.trim();
    let (keyword, cuboid) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) if !rest.trim().is_empty() => (keyword, rest),
        _ => {
            // Distinguish "on" from "bogus" before complaining about the cuboid.
            parse_polarity(line)?;
            return Err(SyntaxError::MissingCuboid);
        }
    };
    Ok(ToggleStep::new(
        parse_polarity(keyword)?,
        parse_cuboid(cuboid.trim())?,
    ))
}

impl FromStr for Polarity {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_polarity(s.trim())
    }
}

impl FromStr for Cuboid {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cuboid(s.trim())
    }
}

impl FromStr for ToggleStep {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_step(s)
    }
}
