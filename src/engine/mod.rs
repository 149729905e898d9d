// ============================================================================
// Engine Module
// Pure formulas and the host-facing calculator
// ============================================================================

mod calculator;

pub mod factory;
pub mod formatting;
pub mod probability;
pub mod statistics;
pub mod time_value;
pub mod valuation;

pub use calculator::{FinancialCalculator, INTEGER_SENTINEL};
pub use factory::{create_from_config, CalculatorBuilder};
