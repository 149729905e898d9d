// ============================================================================
// Time Value of Money
// Interest, amortization and discounting formulas
// ============================================================================
//
// Rates are percentages (5.0 means 5%) except in `net_present_value`, which
// takes a fractional rate (0.05). Periods are whole numbers. Division by
// zero and logarithms of non-positive numbers are not intercepted; they
// yield IEEE-754 infinity or NaN.

use crate::domain::CashFlowSeries;

#[inline]
fn growth_factor(rate_pct: f64, time: i32) -> f64 {
    (1.0 + rate_pct / 100.0).powf(time as f64)
}

/// `principal * rate * time / 100`
pub fn simple_interest(principal: f64, rate_pct: f64, time: i32) -> f64 {
    principal * rate_pct * time as f64 / 100.0
}

/// Interest earned (not the final balance) under periodic compounding.
pub fn compound_interest(principal: f64, rate_pct: f64, time: i32) -> f64 {
    principal * growth_factor(rate_pct, time) - principal
}

/// Level monthly payment for a loan of `years` years.
///
/// A zero rate falls back to straight division of the principal.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: i32) -> f64 {
    let r = annual_rate_pct / 100.0 / 12.0;
    let n = years.wrapping_mul(12);
    if r == 0.0 {
        return principal / n as f64;
    }
    principal * r / (1.0 - (1.0 + r).powf(-(n as f64)))
}

/// `principal * (1 + rate)^time`
pub fn future_value(principal: f64, rate_pct: f64, time: i32) -> f64 {
    principal * growth_factor(rate_pct, time)
}

/// `future_value / (1 + rate)^time`
pub fn present_value(future_value: f64, rate_pct: f64, time: i32) -> f64 {
    future_value / growth_factor(rate_pct, time)
}

/// Whole periods needed for `principal` to grow to `future_value`.
///
/// The float-to-int conversion saturates, and NaN maps to 0.
pub fn time_to_reach_future_value(principal: f64, rate_pct: f64, future_value: f64) -> i32 {
    ((future_value / principal).ln() / (1.0 + rate_pct / 100.0).ln()).ceil() as i32
}

/// Percentage rate that grows `principal` to `future_value` in `time` periods.
pub fn rate_to_reach_future_value(principal: f64, time: i32, future_value: f64) -> f64 {
    ((future_value / principal).powf(1.0 / time as f64) - 1.0) * 100.0
}

/// Net present value of cash flows starting at period 1. `rate` is a
/// fraction, not a percentage. An empty series is worth 0.
pub fn net_present_value(cash_flows: &CashFlowSeries, rate: f64) -> f64 {
    cash_flows
        .periods()
        .map(|(period, flow)| flow / (1.0 + rate).powf(period as f64))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_simple_interest() {
        assert_eq!(simple_interest(1000.0, 5.0, 2), 100.0);
        assert_eq!(simple_interest(1000.0, 5.0, 0), 0.0);
    }

    #[test]
    fn test_compound_interest() {
        assert!((compound_interest(1000.0, 5.0, 2) - 102.5).abs() < EPS);
        assert!((compound_interest(1000.0, 0.0, 10)).abs() < EPS);
    }

    #[test]
    fn test_monthly_payment() {
        // 200k over 30 years at 6%: 1199.10
        let payment = monthly_payment(200_000.0, 6.0, 30);
        assert!((payment - 1199.10).abs() < 0.01);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        assert!((monthly_payment(12_000.0, 0.0, 1) - 1000.0).abs() < EPS);
    }

    #[test]
    fn test_monthly_payment_zero_years_is_unguarded() {
        assert!(monthly_payment(1000.0, 0.0, 0).is_infinite());
        assert!(monthly_payment(1000.0, 5.0, 0).is_infinite());
    }

    #[test]
    fn test_future_and_present_value() {
        assert!((future_value(1000.0, 10.0, 2) - 1210.0).abs() < EPS);
        assert!((present_value(1210.0, 10.0, 2) - 1000.0).abs() < EPS);
    }

    #[test]
    fn test_time_to_reach_future_value() {
        // 1.1^7 = 1.948..., 1.1^8 = 2.143...
        assert_eq!(time_to_reach_future_value(1000.0, 10.0, 2000.0), 8);
        assert_eq!(time_to_reach_future_value(1000.0, 10.0, 1000.0), 0);
    }

    #[test]
    fn test_time_to_reach_future_value_degenerate_inputs() {
        // ln(negative) is NaN, which converts to 0
        assert_eq!(time_to_reach_future_value(-1000.0, 10.0, 2000.0), 0);
        // zero rate divides by ln(1) = 0 and saturates
        assert_eq!(time_to_reach_future_value(1000.0, 0.0, 2000.0), i32::MAX);
    }

    #[test]
    fn test_rate_to_reach_future_value() {
        assert!((rate_to_reach_future_value(1000.0, 2, 1210.0) - 10.0).abs() < EPS);
        // time 0 -> 1/0 exponent
        assert!(rate_to_reach_future_value(1000.0, 0, 1210.0).is_infinite());
    }

    #[test]
    fn test_net_present_value() {
        let flows = CashFlowSeries::new(vec![100.0, 100.0, 100.0]);
        let expected = 100.0 / 1.1 + 100.0 / 1.21 + 100.0 / 1.331;
        assert!((net_present_value(&flows, 0.1) - expected).abs() < EPS);
        assert_eq!(net_present_value(&CashFlowSeries::default(), 0.1), 0.0);
    }
}
