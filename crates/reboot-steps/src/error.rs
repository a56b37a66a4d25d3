//! Errors raised while reading toggle steps.

use reboot_core::SyntaxError;
use thiserror::Error;

/// Step source error type.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Line that does not follow the step grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// JSON input that does not describe a step list
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error on a specific (1-based) input line
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Line the error was raised on, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
