// ============================================================================
// Calculator Errors
// Recoverable failures raised while parsing or validating calculator inputs
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric shape a text token was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// 32-bit signed integer (optional sign, ASCII digits)
    Integer,
    /// 64-bit floating point
    Float,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Float => write!(f, "floating-point number"),
        }
    }
}

/// Coarse error category used for logging and for hosts that only care
/// about which family of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    Parse,
    Shape,
    Locale,
    Domain,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Shape => write!(f, "shape"),
            ErrorKind::Locale => write!(f, "locale"),
            ErrorKind::Domain => write!(f, "domain"),
        }
    }
}

/// Errors that a calculation can recover from by returning a sentinel.
///
/// Undefined arithmetic (division by zero, logarithm of a non-positive
/// number) is never represented here; it flows through as IEEE-754
/// infinity or NaN.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CalculatorError {
    /// A series element could not be parsed
    InvalidToken {
        token: String,
        expected: TokenKind,
    },
    /// A required series was empty
    EmptySeries,
    /// Values and weights differ in length
    LengthMismatch { values: usize, weights: usize },
    /// Locale tag is not of the form `language_REGION`
    MalformedLocaleTag(String),
    /// Locale tag is well formed but no format is known for it
    UnsupportedLocale(String),
    /// A distribution parameter that must be strictly positive was not
    NonPositiveParameter { name: &'static str, value: f64 },
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::InvalidToken { .. } => ErrorKind::Parse,
            CalculatorError::EmptySeries | CalculatorError::LengthMismatch { .. } => {
                ErrorKind::Shape
            },
            CalculatorError::MalformedLocaleTag(_) | CalculatorError::UnsupportedLocale(_) => {
                ErrorKind::Locale
            },
            CalculatorError::NonPositiveParameter { .. } => ErrorKind::Domain,
        }
    }
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::InvalidToken { token, expected } => {
                write!(f, "invalid input: \"{}\" is not a valid {}", token, expected)
            },
            CalculatorError::EmptySeries => write!(f, "invalid input: series is empty"),
            CalculatorError::LengthMismatch { values, weights } => write!(
                f,
                "lists are empty or have different lengths ({} values, {} weights)",
                values, weights
            ),
            CalculatorError::MalformedLocaleTag(tag) => {
                write!(f, "invalid locale: \"{}\" is not of the form language_REGION", tag)
            },
            CalculatorError::UnsupportedLocale(tag) => {
                write!(f, "invalid locale: no number format known for \"{}\"", tag)
            },
            CalculatorError::NonPositiveParameter { name, value } => {
                write!(f, "{} must be strictly positive, got {}", name, value)
            },
        }
    }
}

impl std::error::Error for CalculatorError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalculatorError>;
