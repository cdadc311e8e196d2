//! Error type for parsing `#RRGGBB` strings.

use thiserror::Error;

/// Returned when a string is not a canonical `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not start with `#`
    #[error("hex color must start with '#'")]
    MissingHash,
    /// Wrong number of digits after the `#`
    #[error("hex color must have 6 digits after '#', found {0}")]
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
}
