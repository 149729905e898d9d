// ============================================================================
// Probability Distributions
// Normal and exponential CDFs, Poisson mass function
// ============================================================================

use crate::numeric::{erfc, ln_factorial, CalcResult, CalculatorError};

/// Beyond this many standard deviations the normal CDF is exactly 0 or 1.
const NORMAL_TAIL_CUTOFF: f64 = 40.0;

/// P(X <= x) for X ~ N(0, 1).
pub fn cumulative_normal_distribution(x: f64) -> f64 {
    if x < -NORMAL_TAIL_CUTOFF {
        return 0.0;
    }
    if x > NORMAL_TAIL_CUTOFF {
        return 1.0;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// P(X <= x) for an exponential distribution with the given mean.
///
/// # Errors
/// `NonPositiveParameter` unless `mean > 0`.
pub fn cumulative_exponential_distribution(x: f64, mean: f64) -> CalcResult<f64> {
    // `!(mean > 0.0)` also rejects NaN
    if !(mean > 0.0) {
        return Err(CalculatorError::NonPositiveParameter { name: "mean", value: mean });
    }
    if x <= 0.0 {
        return Ok(0.0);
    }
    Ok(-(-x / mean).exp_m1())
}

/// P(X = k) for X ~ Poisson(lambda).
///
/// # Errors
/// `NonPositiveParameter` unless `lambda > 0`.
pub fn poisson_probability(k: i32, lambda: f64) -> CalcResult<f64> {
    if !(lambda > 0.0) {
        return Err(CalculatorError::NonPositiveParameter { name: "lambda", value: lambda });
    }
    if k < 0 {
        return Ok(0.0);
    }
    let k_f = k as f64;
    Ok((k_f * lambda.ln() - lambda - ln_factorial(k as u32)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-14;

    #[test]
    fn test_normal_cdf_known_values() {
        assert_eq!(cumulative_normal_distribution(0.0), 0.5);
        assert!((cumulative_normal_distribution(1.0) - 0.841_344_746_068_542_9).abs() < EPS);
        assert!((cumulative_normal_distribution(2.0) - 0.977_249_868_051_820_8).abs() < EPS);
        assert!((cumulative_normal_distribution(-1.96) - 0.024_997_895_148_220_435).abs() < EPS);
        assert_eq!(cumulative_normal_distribution(-50.0), 0.0);
        assert_eq!(cumulative_normal_distribution(50.0), 1.0);
    }

    #[test]
    fn test_normal_cdf_deep_tail_keeps_relative_precision() {
        // Φ(-8) = 6.220960574271785e-16
        let p = cumulative_normal_distribution(-8.0);
        assert!((p / 6.220_960_574_271_785e-16 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for x in [0.3, 1.1, 2.5] {
            let sum = cumulative_normal_distribution(x) + cumulative_normal_distribution(-x);
            assert!((sum - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_exponential_cdf() {
        let p = cumulative_exponential_distribution(2.0, 2.0).unwrap();
        assert!((p - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
        assert_eq!(cumulative_exponential_distribution(-1.0, 2.0).unwrap(), 0.0);
        assert!(cumulative_exponential_distribution(1.0, 0.0).is_err());
        assert!(cumulative_exponential_distribution(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_poisson_probability() {
        // e^-2 * 2^3 / 3!
        let expected = (-2.0f64).exp() * 8.0 / 6.0;
        assert!((poisson_probability(3, 2.0).unwrap() - expected).abs() < 1e-12);
        assert!((poisson_probability(0, 1.5).unwrap() - (-1.5f64).exp()).abs() < 1e-12);
        assert_eq!(poisson_probability(-1, 2.0).unwrap(), 0.0);
        assert!(matches!(
            poisson_probability(1, -2.0),
            Err(CalculatorError::NonPositiveParameter { name: "lambda", .. })
        ));
    }

    #[test]
    fn test_poisson_mass_sums_to_one() {
        let total: f64 = (0..100).map(|k| poisson_probability(k, 4.0).unwrap()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
