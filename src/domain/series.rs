// ============================================================================
// Series Value Objects
// Parsed, immutable numeric inputs for a single calculation
// ============================================================================

use crate::numeric::{parse_floats, parse_integers, CalcResult, CalculatorError};

/// Ordered numeric values parsed from text tokens or supplied directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSeries<T> {
    values: Vec<T>,
}

impl<T> NumericSeries<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl NumericSeries<i32> {
    /// Parse integer tokens (statistics functions).
    pub fn parse_integers<S: AsRef<str>>(tokens: &[S]) -> CalcResult<Self> {
        parse_integers(tokens).map(Self::new)
    }
}

impl<T> From<Vec<T>> for NumericSeries<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

/// Values paired with weights. Both sides are non-empty and of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSeries {
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl WeightedSeries {
    /// # Errors
    /// `LengthMismatch` if either side is empty or the lengths differ.
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> CalcResult<Self> {
        Self::check_shape(values.len(), weights.len())?;
        Ok(Self { values, weights })
    }

    /// Shape is checked before any token is parsed.
    pub fn parse<S: AsRef<str>, W: AsRef<str>>(values: &[S], weights: &[W]) -> CalcResult<Self> {
        Self::check_shape(values.len(), weights.len())?;
        Ok(Self {
            values: parse_floats(values)?,
            weights: parse_floats(weights)?,
        })
    }

    fn check_shape(values: usize, weights: usize) -> CalcResult<()> {
        if values == 0 || weights == 0 || values != weights {
            return Err(CalculatorError::LengthMismatch { values, weights });
        }
        Ok(())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Signed cash flows; the first element belongs to period 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    pub fn new(flows: Vec<f64>) -> Self {
        Self { flows }
    }

    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> CalcResult<Self> {
        parse_floats(tokens).map(Self::new)
    }

    /// Iterate `(period, cash_flow)` with periods starting at 1.
    pub fn periods(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.flows
            .iter()
            .enumerate()
            .map(|(i, flow)| (i as i32 + 1, *flow))
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::TokenKind;

    #[test]
    fn test_parse_integer_series() {
        let series = NumericSeries::parse_integers(&["3", "1", "2"]).unwrap();
        assert_eq!(series.as_slice(), &[3, 1, 2]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_parse_integer_series_rejects_floats() {
        let err = NumericSeries::parse_integers(&["1", "2.5"]).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidToken {
                token: "2.5".to_string(),
                expected: TokenKind::Integer,
            }
        );
    }

    #[test]
    fn test_weighted_series_shape() {
        assert!(WeightedSeries::new(vec![1.0, 2.0], vec![1.0, 1.0]).is_ok());
        assert_eq!(
            WeightedSeries::new(vec![1.0], vec![1.0, 2.0]).unwrap_err(),
            CalculatorError::LengthMismatch { values: 1, weights: 2 }
        );
        assert!(WeightedSeries::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_weighted_series_checks_shape_before_parsing() {
        // Mismatched lengths win over the unparsable token
        let err = WeightedSeries::parse(&["x"], &["1", "2"]).unwrap_err();
        assert!(matches!(err, CalculatorError::LengthMismatch { .. }));
    }

    #[test]
    fn test_cash_flow_periods_start_at_one() {
        let flows = CashFlowSeries::parse(&["-100", "60", "60"]).unwrap();
        let periods: Vec<_> = flows.periods().collect();
        assert_eq!(periods, vec![(1, -100.0), (2, 60.0), (3, 60.0)]);
    }
}
