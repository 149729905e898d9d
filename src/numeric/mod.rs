// ============================================================================
// Numeric Module
// Token parsing, error taxonomy and special functions
// ============================================================================
//
// This module provides:
// - CalculatorError: recoverable parse/shape/locale/domain failures
// - parse_*: text token to i32/f64 conversion
// - erfc/ln_factorial: special functions backing the distribution formulas
//
// Design principles:
// - Parsing returns Result (no panics)
// - Undefined arithmetic is left to IEEE-754, never turned into an error

mod errors;
mod parse;
mod special;

pub use errors::{CalcResult, CalculatorError, ErrorKind, TokenKind};
pub use parse::{parse_float, parse_floats, parse_integer, parse_integers};
pub use special::{erfc, ln_factorial};
