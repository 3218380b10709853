//! Color parsing errors.

use thiserror::Error;

/// Error returned when a raw string is not a recognised CSS color value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The input was empty or only whitespace.
    #[error("empty color value")]
    Empty,

    /// A `#` color with the wrong length or non-hex digits.
    #[error("invalid hex color: #{0} (must be 3, 4, 6 or 8 hex digits)")]
    InvalidHex(String),

    /// An identifier that is neither a supported keyword nor a named color.
    #[error("unknown color keyword: {0}")]
    UnknownKeyword(String),

    /// A functional notation other than `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    #[error("unsupported color function: {0}()")]
    UnsupportedFunction(String),

    /// A hue given with a unit other than `deg`, `rad`, `grad` or `turn`.
    #[error("invalid angle unit: {0}")]
    InvalidAngleUnit(String),

    /// Any other tokenizer or syntax failure.
    #[error("invalid color syntax: {0}")]
    Syntax(String),
}
