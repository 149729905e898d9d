// ============================================================================
// Financial Calculator Library
// Stateless statistical and financial formulas with sentinel results
// ============================================================================

//! # Financial Calculator
//!
//! A library of closed-form statistical and financial formulas for hosts
//! that pass numbers around as text tokens.
//!
//! ## Features
//!
//! - **Descriptive statistics** over integer series: mean, median, mode,
//!   variance, standard deviation, range, sum, weighted median
//! - **Time value of money**: simple/compound interest, loan payments, NPV,
//!   future/present value, time and rate to reach a target
//! - **Valuation ratios**: ROI, EPS, P/E, market capitalization
//! - **Distributions**: normal and exponential CDFs, Poisson mass function
//! - **Locale formatting** of integer amounts and money strings
//! - **Sentinel results**: recoverable failures never panic; they return
//!   NaN, `-1`, an empty list or an empty string and notify an
//!   [`ErrorReporter`](interfaces::ErrorReporter)
//!
//! ## Example
//!
//! ```rust
//! use financial_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let reporter = Arc::new(CollectingErrorReporter::new());
//! let calc = FinancialCalculator::new(reporter.clone());
//!
//! assert_eq!(calc.mean(&["1", "2", "3", "4"]), 2.5);
//! assert_eq!(calc.simple_interest(1000.0, 5.0, 2), 100.0);
//! assert_eq!(calc.format_currency(1_234_567, "pt_BR"), "1.234.567");
//!
//! // Bad input yields a sentinel and a report
//! assert_eq!(calc.sum(&["1", "x"]), -1);
//! assert_eq!(reporter.drain()[0].operation, "Sum");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        BooleanValue, CalculatorConfig, CashFlowSeries, Currency, LocaleFormat, LocaleTag,
        NumericSeries, SymbolPlacement, WeightedSeries,
    };
    pub use crate::engine::{create_from_config, CalculatorBuilder, FinancialCalculator};
    pub use crate::interfaces::{
        CollectingErrorReporter, ErrorReport, ErrorReporter, LoggingErrorReporter,
        NoOpErrorReporter,
    };
    pub use crate::numeric::{CalcResult, CalculatorError, ErrorKind};
}
