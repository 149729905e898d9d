// ============================================================================
// Token Parsing
// Converts host-supplied text tokens into numeric values
// ============================================================================

use super::errors::{CalcResult, CalculatorError, TokenKind};

/// Parse a token as a 32-bit signed integer.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits. Surrounding
/// whitespace, decimal points and values outside the `i32` range are rejected.
#[inline]
pub fn parse_integer(token: &str) -> CalcResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| CalculatorError::InvalidToken {
            token: token.to_string(),
            expected: TokenKind::Integer,
        })
}

/// Parse a token as a 64-bit float. Leading and trailing whitespace is ignored.
#[inline]
pub fn parse_float(token: &str) -> CalcResult<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| CalculatorError::InvalidToken {
            token: token.to_string(),
            expected: TokenKind::Float,
        })
}

/// Parse every token as an integer, failing on the first bad one.
pub fn parse_integers<S: AsRef<str>>(tokens: &[S]) -> CalcResult<Vec<i32>> {
    tokens.iter().map(|t| parse_integer(t.as_ref())).collect()
}

/// Parse every token as a float, failing on the first bad one.
pub fn parse_floats<S: AsRef<str>>(tokens: &[S]) -> CalcResult<Vec<f64>> {
    tokens.iter().map(|t| parse_float(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer("-7"), Ok(-7));
        assert_eq!(parse_integer("+3"), Ok(3));
    }

    #[test]
    fn test_parse_integer_invalid() {
        for token in ["", "1.5", " 4", "abc", "2147483648"] {
            let err = parse_integer(token).unwrap_err();
            assert_eq!(
                err,
                CalculatorError::InvalidToken {
                    token: token.to_string(),
                    expected: TokenKind::Integer,
                }
            );
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2.5"), Ok(2.5));
        assert_eq!(parse_float(" 1e3 "), Ok(1000.0));
        assert_eq!(parse_float("-0.25"), Ok(-0.25));
        assert!(parse_float("1,5").is_err());
    }

    #[test]
    fn test_parse_series_stops_at_first_error() {
        let err = parse_integers(&["1", "x", "y"]).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidToken { ref token, .. } if token == "x"));

        assert_eq!(parse_floats(&["1", "2.5"]), Ok(vec![1.0, 2.5]));
    }
}
