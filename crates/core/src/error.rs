//! Error types for the tint core.
//!
//! Only hex decoding can fail. The numeric layer is total, and the public
//! `parse_hex*` functions collapse these errors to `None`.

use thiserror::Error;

/// Reasons a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Nothing was left after stripping the optional prefix.
    #[error("empty hex color")]
    EmptyHex,

    /// The digit count (after prefix stripping) was not 3, 4, 6 or 8.
    #[error("invalid hex color length {0}: expected 3, 4, 6 or 8 digits")]
    InvalidHexLength(usize),

    /// The string contained something other than hex digits.
    #[error("invalid hex digit in '{0}'")]
    InvalidHexDigit(String),
}
