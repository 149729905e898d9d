// ============================================================================
// Descriptive Statistics
// Central tendency and dispersion over integer series
// ============================================================================

use crate::domain::WeightedSeries;
use crate::numeric::{CalcResult, CalculatorError};
use std::collections::BTreeMap;

#[inline]
fn require_non_empty<T>(values: &[T]) -> CalcResult<&[T]> {
    if values.is_empty() {
        Err(CalculatorError::EmptySeries)
    } else {
        Ok(values)
    }
}

/// Arithmetic mean.
pub fn mean(values: &[i32]) -> CalcResult<f64> {
    let values = require_non_empty(values)?;
    let total: f64 = values.iter().map(|&v| v as f64).sum();
    Ok(total / values.len() as f64)
}

/// Sum of squared deviations from the mean.
fn sum_of_squares(values: &[i32]) -> CalcResult<f64> {
    let m = mean(values)?;
    Ok(values.iter().map(|&v| (v as f64 - m).powi(2)).sum())
}

/// Sample variance, divisor `n - 1`.
///
/// A single-element series yields `0 / 0`, i.e. NaN.
pub fn variance(values: &[i32]) -> CalcResult<f64> {
    let squares = sum_of_squares(values)?;
    Ok(squares / (values.len() as f64 - 1.0))
}

/// Population variance, divisor `n`.
pub fn population_variance(values: &[i32]) -> CalcResult<f64> {
    let squares = sum_of_squares(values)?;
    Ok(squares / values.len() as f64)
}

/// Square root of the population (`population = true`) or sample variance.
pub fn standard_deviation(values: &[i32], population: bool) -> CalcResult<f64> {
    let var = if population {
        population_variance(values)?
    } else {
        variance(values)?
    };
    Ok(var.sqrt())
}

/// Middle value of the sorted series; mean of the two middles for even counts.
pub fn median(values: &[i32]) -> CalcResult<f64> {
    let values = require_non_empty(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let size = sorted.len();
    if size % 2 == 0 {
        let mid1 = sorted[size / 2 - 1] as f64;
        let mid2 = sorted[size / 2] as f64;
        Ok((mid1 + mid2) / 2.0)
    } else {
        Ok(sorted[size / 2] as f64)
    }
}

/// Every value sharing the highest frequency, ascending.
///
/// Returns an empty vector when the mode set is as large as the series,
/// which happens exactly when every value is unique.
pub fn mode(values: &[i32]) -> CalcResult<Vec<i32>> {
    let values = require_non_empty(values)?;

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);

    let modes: Vec<i32> = counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value)
        .collect();

    if modes.len() == values.len() {
        return Ok(Vec::new());
    }
    Ok(modes)
}

/// `max - min` with 32-bit wrapping arithmetic.
pub fn range(values: &[i32]) -> CalcResult<i32> {
    let values = require_non_empty(values)?;
    let (min, max) = values
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Ok(max.wrapping_sub(min))
}

/// Sum with 32-bit wrapping arithmetic.
pub fn sum(values: &[i32]) -> CalcResult<i32> {
    let values = require_non_empty(values)?;
    Ok(values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v)))
}

/// Weighted midpoint of a value/weight series.
///
/// Values and weights are sorted **independently** of each other, so the
/// weight applied to a middle value is the weight of the same rank, not the
/// weight originally supplied alongside it. For an odd count the weights are
/// ignored and the middle value is returned.
///
/// ```
/// use financial_calculator::domain::WeightedSeries;
/// use financial_calculator::engine::statistics::weighted_median;
///
/// let series = WeightedSeries::new(vec![4.0, 1.0, 3.0, 2.0], vec![1.0, 4.0, 3.0, 2.0]).unwrap();
/// // sorted values [1, 2, 3, 4], sorted weights [1, 2, 3, 4]
/// // (2*2 + 3*3) / (2 + 3)
/// assert!((weighted_median(&series) - 2.6).abs() < 1e-12);
/// ```
pub fn weighted_median(series: &WeightedSeries) -> f64 {
    let mut values = series.values().to_vec();
    let mut weights = series.weights().to_vec();
    values.sort_by(f64::total_cmp);
    weights.sort_by(f64::total_cmp);

    let n = values.len();
    if n % 2 == 0 {
        let (i1, i2) = (n / 2 - 1, n / 2);
        let (v1, v2) = (values[i1], values[i2]);
        let (w1, w2) = (weights[i1], weights[i2]);
        (v1 * w1 + v2 * w2) / (w1 + w2)
    } else {
        values[n / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_mean() {
        assert!((mean(&[1, 2, 3, 4]).unwrap() - 2.5).abs() < EPS);
        assert!((mean(&[-5, 5]).unwrap()).abs() < EPS);
        assert_eq!(mean(&[]), Err(CalculatorError::EmptySeries));
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let m = mean(&[i32::MAX, i32::MAX]).unwrap();
        assert_eq!(m, i32::MAX as f64);
    }

    #[test]
    fn test_variance_is_sample() {
        // deviations from 5: 9,1,1,1,0,0,4,16 -> 32
        let data = [2, 4, 4, 4, 5, 5, 7, 9];
        assert!((variance(&data).unwrap() - 32.0 / 7.0).abs() < EPS);
        assert!((population_variance(&data).unwrap() - 4.0).abs() < EPS);
    }

    #[test]
    fn test_standard_deviation() {
        let data = [2, 4, 4, 4, 5, 5, 7, 9];
        assert!((standard_deviation(&data, true).unwrap() - 2.0).abs() < EPS);
        assert!(
            (standard_deviation(&data, false).unwrap() - (32.0f64 / 7.0).sqrt()).abs() < EPS
        );
    }

    #[test]
    fn test_single_element_sample_is_nan() {
        assert!(variance(&[7]).unwrap().is_nan());
        assert!(standard_deviation(&[7], false).unwrap().is_nan());
        assert_eq!(standard_deviation(&[7], true).unwrap(), 0.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3, 1, 2]).unwrap(), 2.0);
        assert_eq!(median(&[4, 1, 3, 2]).unwrap(), 2.5);
        assert_eq!(median(&[i32::MAX, i32::MAX]).unwrap(), i32::MAX as f64);
        assert!(median(&[]).is_err());
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1, 1, 2, 3]).unwrap(), vec![1]);
        assert_eq!(mode(&[3, 3, 1, 1, 2]).unwrap(), vec![1, 3]);
        assert_eq!(mode(&[1, 2, 3]).unwrap(), Vec::<i32>::new());
        assert_eq!(mode(&[5]).unwrap(), Vec::<i32>::new());
        assert_eq!(mode(&[2, 2]).unwrap(), vec![2]);
    }

    #[test]
    fn test_range_and_sum() {
        assert_eq!(range(&[5, -3, 10]).unwrap(), 13);
        assert_eq!(sum(&[5, -3, 10]).unwrap(), 12);
        assert_eq!(range(&[]), Err(CalculatorError::EmptySeries));
        assert_eq!(sum(&[]), Err(CalculatorError::EmptySeries));
    }

    #[test]
    fn test_integer_wrapping() {
        assert_eq!(sum(&[i32::MAX, 1]).unwrap(), i32::MIN);
        assert_eq!(range(&[i32::MIN, i32::MAX]).unwrap(), -1);
    }

    #[test]
    fn test_weighted_median_pairs_by_rank() {
        let series = WeightedSeries::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        assert!((weighted_median(&series) - 2.5).abs() < EPS);

        // Weight 10 was supplied with value 4, but after independent sorting
        // it pairs with no middle value at all.
        let series =
            WeightedSeries::new(vec![4.0, 3.0, 2.0, 1.0], vec![10.0, 1.0, 1.0, 1.0]).unwrap();
        assert!((weighted_median(&series) - 2.5).abs() < EPS);

        // Middle weights are 2 and 3 regardless of their original positions
        let series =
            WeightedSeries::new(vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        assert!((weighted_median(&series) - 2.6).abs() < EPS);
    }

    #[test]
    fn test_weighted_median_odd_ignores_weights() {
        let series = WeightedSeries::new(vec![9.0, 1.0, 5.0], vec![100.0, 0.0, 0.0]).unwrap();
        assert_eq!(weighted_median(&series), 5.0);
    }

    #[test]
    fn test_weighted_median_zero_weights_is_nan() {
        let series = WeightedSeries::new(vec![1.0, 2.0], vec![0.0, 0.0]).unwrap();
        assert!(weighted_median(&series).is_nan());
    }
}
