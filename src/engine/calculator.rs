// ============================================================================
// Financial Calculator
// Host-facing facade: parses tokens, runs formulas, maps failures to sentinels
// ============================================================================

use crate::domain::{
    BooleanValue, CalculatorConfig, CashFlowSeries, Currency, NumericSeries, WeightedSeries,
};
use crate::engine::{formatting, probability, statistics, time_value, valuation};
use crate::interfaces::{ErrorReport, ErrorReporter};
use crate::numeric::CalcResult;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Sentinel for `sum` and `range` failures
pub const INTEGER_SENTINEL: i32 = -1;

/// Stateless calculation library with an error-report channel.
///
/// Every method returns a value of a stable type. Parse, shape, locale and
/// parameter failures are reported to the [`ErrorReporter`] and replaced by a
/// sentinel: NaN for most statistics, `-1` for [`sum`](Self::sum) and
/// [`range`](Self::range), an empty vector for [`mode`](Self::mode) and an
/// empty string for [`format_currency`](Self::format_currency). Undefined
/// arithmetic is never reported.
pub struct FinancialCalculator {
    /// Formatting configuration
    config: CalculatorConfig,

    /// Receiver for recoverable failures
    reporter: Arc<dyn ErrorReporter>,
}

impl FinancialCalculator {
    /// Create a calculator with the default configuration
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self::with_config(CalculatorConfig::default(), reporter)
    }

    pub fn with_config(config: CalculatorConfig, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Unwrap a result, or report the error and fall back to `sentinel`.
    fn recover<T>(&self, operation: &'static str, result: CalcResult<T>, sentinel: T) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(operation, kind = %error.kind(), "calculation failed: {}", error);
                self.reporter.on_error(ErrorReport::new(operation, error));
                sentinel
            },
        }
    }

    fn integers<S: AsRef<str>>(tokens: &[S]) -> CalcResult<NumericSeries<i32>> {
        NumericSeries::parse_integers(tokens)
    }

    // ========================================================================
    // Statistics (integer tokens)
    // ========================================================================

    /// Arithmetic mean. NaN on failure.
    pub fn mean<S: AsRef<str>>(&self, numbers: &[S]) -> f64 {
        let result = Self::integers(numbers).and_then(|s| statistics::mean(s.as_slice()));
        self.recover("Mean", result, f64::NAN)
    }

    /// Population (`TRUE`) or sample (`FALSE`) standard deviation. NaN on failure.
    pub fn standard_deviation<S: AsRef<str>>(
        &self,
        numbers: &[S],
        is_population: impl Into<BooleanValue>,
    ) -> f64 {
        let population = is_population.into().is_population();
        let result = Self::integers(numbers)
            .and_then(|s| statistics::standard_deviation(s.as_slice(), population));
        self.recover("StandardDeviation", result, f64::NAN)
    }

    /// Median. NaN on failure.
    pub fn median<S: AsRef<str>>(&self, numbers: &[S]) -> f64 {
        let result = Self::integers(numbers).and_then(|s| statistics::median(s.as_slice()));
        self.recover("Median", result, f64::NAN)
    }

    /// All most-frequent values, ascending. Empty on failure or when every
    /// value is unique.
    pub fn mode<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<i32> {
        let result = Self::integers(numbers).and_then(|s| statistics::mode(s.as_slice()));
        self.recover("Mode", result, Vec::new())
    }

    /// Sample variance (divisor n - 1). NaN on failure.
    pub fn variance<S: AsRef<str>>(&self, numbers: &[S]) -> f64 {
        let result = Self::integers(numbers).and_then(|s| statistics::variance(s.as_slice()));
        self.recover("Variance", result, f64::NAN)
    }

    /// Population variance (divisor n). NaN on failure.
    pub fn population_variance<S: AsRef<str>>(&self, numbers: &[S]) -> f64 {
        let result =
            Self::integers(numbers).and_then(|s| statistics::population_variance(s.as_slice()));
        self.recover("PopulationVariance", result, f64::NAN)
    }

    /// `max - min`. `-1` on failure.
    pub fn range<S: AsRef<str>>(&self, numbers: &[S]) -> i32 {
        let result = Self::integers(numbers).and_then(|s| statistics::range(s.as_slice()));
        self.recover("Range", result, INTEGER_SENTINEL)
    }

    /// Wrapping 32-bit sum. `-1` on failure.
    pub fn sum<S: AsRef<str>>(&self, numbers: &[S]) -> i32 {
        let result = Self::integers(numbers).and_then(|s| statistics::sum(s.as_slice()));
        self.recover("Sum", result, INTEGER_SENTINEL)
    }

    /// Weighted median over float tokens. NaN on failure.
    ///
    /// See [`statistics::weighted_median`] for the pairing rule.
    pub fn weighted_median<S: AsRef<str>, W: AsRef<str>>(
        &self,
        numbers: &[S],
        weights: &[W],
    ) -> f64 {
        let result =
            WeightedSeries::parse(numbers, weights).map(|s| statistics::weighted_median(&s));
        self.recover("WeightedMedian", result, f64::NAN)
    }

    // ========================================================================
    // Time value of money
    // ========================================================================

    pub fn simple_interest(&self, principal: f64, rate: f64, time: i32) -> f64 {
        time_value::simple_interest(principal, rate, time)
    }

    pub fn compound_interest(&self, principal: f64, rate: f64, time: i32) -> f64 {
        time_value::compound_interest(principal, rate, time)
    }

    pub fn monthly_payment(&self, principal: f64, rate: f64, years: i32) -> f64 {
        time_value::monthly_payment(principal, rate, years)
    }

    /// NPV of float cash-flow tokens at fractional `rate`. NaN on failure.
    pub fn net_present_value<S: AsRef<str>>(&self, cash_flows: &[S], rate: f64) -> f64 {
        let result = CashFlowSeries::parse(cash_flows)
            .map(|flows| time_value::net_present_value(&flows, rate));
        self.recover("NetPresentValue", result, f64::NAN)
    }

    pub fn future_value(&self, principal: f64, rate: f64, time: i32) -> f64 {
        time_value::future_value(principal, rate, time)
    }

    pub fn present_value(&self, future_value: f64, rate: f64, time: i32) -> f64 {
        time_value::present_value(future_value, rate, time)
    }

    pub fn time_to_reach_future_value(&self, principal: f64, rate: f64, future_value: f64) -> i32 {
        time_value::time_to_reach_future_value(principal, rate, future_value)
    }

    pub fn rate_to_reach_future_value(&self, principal: f64, time: i32, future_value: f64) -> f64 {
        time_value::rate_to_reach_future_value(principal, time, future_value)
    }

    // ========================================================================
    // Valuation
    // ========================================================================

    pub fn return_on_investment(&self, initial_investment: f64, final_value: f64) -> f64 {
        valuation::return_on_investment(initial_investment, final_value)
    }

    pub fn earnings_per_share(&self, net_income: f64, number_of_shares: i32) -> f64 {
        valuation::earnings_per_share(net_income, number_of_shares)
    }

    pub fn price_to_earnings_ratio(&self, share_price: f64, earnings_per_share: f64) -> f64 {
        valuation::price_to_earnings_ratio(share_price, earnings_per_share)
    }

    pub fn market_capitalization(&self, share_price: f64, number_of_shares: i32) -> f64 {
        valuation::market_capitalization(share_price, number_of_shares)
    }

    pub fn cryptocurrency_profit_loss(&self, buy_price: f64, sell_price: f64, quantity: f64) -> f64 {
        valuation::cryptocurrency_profit_loss(buy_price, sell_price, quantity)
    }

    // ========================================================================
    // Distributions
    // ========================================================================

    pub fn cumulative_normal_distribution(&self, x: f64) -> f64 {
        probability::cumulative_normal_distribution(x)
    }

    /// NaN when `mean` is not strictly positive.
    pub fn cumulative_exponential_distribution(&self, x: f64, mean: f64) -> f64 {
        let result = probability::cumulative_exponential_distribution(x, mean);
        self.recover("CumulativeExponentialDistribution", result, f64::NAN)
    }

    /// NaN when `lambda` is not strictly positive.
    pub fn poisson_probability(&self, k: i32, lambda: f64) -> f64 {
        let result = probability::poisson_probability(k, lambda);
        self.recover("PoissonProbability", result, f64::NAN)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Group the digits of `amount` for a `language_REGION` tag such as
    /// `"pt_BR"`. Empty string on a malformed or unknown tag.
    pub fn format_currency(&self, amount: i64, currency_code: &str) -> String {
        let result = formatting::format_currency(amount, currency_code, &self.config);
        self.recover("FormatCurrency", result, String::new())
    }

    /// [`format_currency`](Self::format_currency) with the currency's locale.
    pub fn format_currency_for(&self, amount: i64, currency: Currency) -> String {
        self.format_currency(amount, currency.to_underlying_value())
    }

    /// Money string with symbol and minor units.
    pub fn format_money(&self, amount: Decimal, currency: Currency) -> String {
        formatting::format_money(amount, currency)
    }

    /// Money string in the configured default currency.
    pub fn format_money_default(&self, amount: Decimal) -> String {
        formatting::format_money(amount, self.config.default_currency)
    }
}
