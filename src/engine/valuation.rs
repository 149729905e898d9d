// ============================================================================
// Valuation Ratios
// Return, per-share and market-size metrics
// ============================================================================

/// Percentage return: `(final - initial) / initial * 100`.
pub fn return_on_investment(initial_investment: f64, final_value: f64) -> f64 {
    ((final_value - initial_investment) / initial_investment) * 100.0
}

/// Earnings per share (EPS)
pub fn earnings_per_share(net_income: f64, number_of_shares: i32) -> f64 {
    net_income / number_of_shares as f64
}

/// Price-to-earnings (P/E) ratio
pub fn price_to_earnings_ratio(share_price: f64, earnings_per_share: f64) -> f64 {
    share_price / earnings_per_share
}

/// Market capitalization: price times shares outstanding
pub fn market_capitalization(share_price: f64, number_of_shares: i32) -> f64 {
    share_price * number_of_shares as f64
}

/// Profit (positive) or loss (negative) on a round trip.
pub fn cryptocurrency_profit_loss(buy_price: f64, sell_price: f64, quantity: f64) -> f64 {
    (sell_price - buy_price) * quantity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_on_investment() {
        assert_eq!(return_on_investment(1000.0, 1500.0), 50.0);
        assert_eq!(return_on_investment(1000.0, 500.0), -50.0);
        assert!(return_on_investment(0.0, 500.0).is_infinite());
        assert!(return_on_investment(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_per_share_metrics() {
        assert_eq!(earnings_per_share(1_000_000.0, 500_000), 2.0);
        assert_eq!(price_to_earnings_ratio(50.0, 2.0), 25.0);
        assert!(earnings_per_share(1.0, 0).is_infinite());
        assert!(price_to_earnings_ratio(50.0, 0.0).is_infinite());
    }

    #[test]
    fn test_market_capitalization() {
        assert_eq!(market_capitalization(25.5, 1_000), 25_500.0);
    }

    #[test]
    fn test_cryptocurrency_profit_loss() {
        assert_eq!(cryptocurrency_profit_loss(30_000.0, 35_000.0, 0.5), 2_500.0);
        assert_eq!(cryptocurrency_profit_loss(35_000.0, 30_000.0, 2.0), -10_000.0);
    }
}
