// ============================================================================
// Domain Models Module
// Value objects consumed by the calculation library
// ============================================================================

pub mod boolean_value;
pub mod config;
pub mod currency;
pub mod locale;
pub mod series;

pub use boolean_value::BooleanValue;
pub use config::CalculatorConfig;
pub use currency::Currency;
pub use locale::{LocaleFormat, LocaleTag, SymbolPlacement};
pub use series::{CashFlowSeries, NumericSeries, WeightedSeries};
