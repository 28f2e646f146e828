//! Error types for band numbering
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for band-number operations
pub type Result<T> = std::result::Result<T, BandNumberError>;

/// Malformed band-number text
///
/// Band numbers are never coerced: anything that is not a run of ASCII
/// decimal digits is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandNumberError {
    /// Input was the empty string
    #[error("invalid band number: empty string")]
    Empty,

    /// Input contained something other than a decimal digit
    #[error("invalid band number {input:?}: unexpected character {char:?} at position {position}")]
    InvalidChar {
        /// The rejected input
        input: String,
        /// The offending character
        char: char,
        /// Character position of the offending character
        position: usize,
    },
}
