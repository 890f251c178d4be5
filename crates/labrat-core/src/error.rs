//! Error types for labrat
//!
//! The conversion functions themselves never fail. Errors only arise when
//! text typed by a user is turned into numbers at the boundary.

use thiserror::Error;

/// Result type for labrat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected hex color text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Nothing left after stripping the leading `#`
    #[error("empty color string")]
    Empty,

    /// Wrong number of hex digits
    #[error("invalid hex color length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside `[0-9a-fA-F]`
    #[error("invalid hex digits: {0:?}")]
    InvalidHex(String),
}

/// Errors that can occur in labrat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Hex color text could not be parsed
    #[error("Color parse error: {0}")]
    Parse(#[from] ParseError),

    /// A numeric field holds text that is not an integer
    #[error("Invalid number for {field}: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
}
