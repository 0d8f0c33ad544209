//! Error types for classair-types.

use thiserror::Error;

/// Errors that can occur when parsing classroom parameters from text.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text does not name a window state.
    #[error("Unknown window state '{0}' (expected closed, cracked or open)")]
    UnknownWindowState(String),

    /// The text does not name a heating/cooling mode.
    #[error("Unknown HVAC state '{0}' (expected off, cooling or heating)")]
    UnknownHvacState(String),
}

/// Result type alias using classair-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
