//! Error types for classair-core.
//!
//! The model itself is total on its inputs and never returns an error. The
//! variants here cover the edges around it: range checks performed on behalf
//! of a front end, and parsing of textual parameters.

use thiserror::Error;

use classair_types::ParseError;

use crate::validation::ValidationWarning;

/// Errors that can occur in classair-core.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more classroom parameters are outside the accepted ranges.
    #[error("Invalid input: {}", join_warnings(.0))]
    InvalidInput(Vec<ValidationWarning>),

    /// A textual parameter could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn join_warnings(warnings: &[ValidationWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using classair-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
