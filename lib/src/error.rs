//! Parse failures.
//!
//! Formatting has no error type: a formatter that cannot fit its output
//! returns 0 and leaves the sentinel byte in `dst[0]`.

use core::fmt;

/// Why a decimal (or boolean) string was rejected.
///
/// Every variant is returned to the immediate caller; nothing is recovered
/// internally and no partial value is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input had zero length.
    EmptyInput,
    /// A byte outside `'0'..='9'` appeared where a digit was expected.
    InvalidCharacter,
    /// The input was a lone `-` with no digits.
    InvalidString,
    /// The value does not fit the target type.
    Overflow,
    /// The input is not one of the accepted boolean spellings.
    InvalidBool,
}

impl ParseError {
    /// Short static name, for logging without `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::InvalidCharacter => "invalid character",
            Self::InvalidString => "invalid string",
            Self::Overflow => "overflow",
            Self::InvalidBool => "invalid boolean",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot parse integer from empty input"),
            Self::InvalidCharacter => write!(f, "invalid digit found in input"),
            Self::InvalidString => write!(f, "sign without digits"),
            Self::Overflow => write!(f, "number too large to fit in target type"),
            Self::InvalidBool => write!(f, "input is not a recognised boolean"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Convenience result type for parse operations.
pub type ParseResult<T = ()> = Result<T, ParseError>;
