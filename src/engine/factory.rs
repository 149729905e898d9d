// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::{CalculatorConfig, Currency, LocaleFormat};
use crate::engine::FinancialCalculator;
use crate::interfaces::{ErrorReporter, LoggingErrorReporter, NoOpErrorReporter};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `reporter` - Receiver for recoverable failures
///
/// # Returns
/// * `Result<FinancialCalculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use financial_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::brazil();
/// let calc = create_from_config(config, Arc::new(NoOpErrorReporter)).unwrap();
/// assert_eq!(calc.config().default_currency, Currency::BRL);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    reporter: Arc<dyn ErrorReporter>,
) -> Result<FinancialCalculator, String> {
    config.validate()?;

    tracing::debug!(
        default_currency = %config.default_currency,
        custom_locales = config.custom_locales.len(),
        "creating financial calculator"
    );

    Ok(FinancialCalculator::with_config(config, reporter))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for [`FinancialCalculator`]
///
/// # Example
/// ```
/// use financial_calculator::prelude::*;
///
/// let calc = CalculatorBuilder::new()
///     .with_default_currency(Currency::EUR)
///     .with_logging()
///     .build()
///     .unwrap();
/// assert_eq!(calc.sum(&["1", "2", "3"]), 6);
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    /// Create a builder with default configuration and no reporter
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            reporter: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            reporter: None,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set the default currency
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.config.default_currency = currency;
        self
    }

    /// Register a custom locale format
    pub fn with_locale(mut self, format: LocaleFormat) -> Self {
        self.config.custom_locales.push(format);
        self
    }

    // ========================================================================
    // Error Reporting
    // ========================================================================

    /// Send reports to a custom receiver
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Send reports to `tracing` at WARN level
    pub fn with_logging(self) -> Self {
        self.with_reporter(Arc::new(LoggingErrorReporter))
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply Brazilian configuration
    pub fn brazil() -> Self {
        Self::from_config(CalculatorConfig::brazil())
    }

    /// Apply US configuration
    pub fn united_states() -> Self {
        Self::from_config(CalculatorConfig::united_states())
    }

    /// Apply eurozone configuration
    pub fn eurozone() -> Self {
        Self::from_config(CalculatorConfig::eurozone())
    }

    /// Apply Japanese configuration
    pub fn japan() -> Self {
        Self::from_config(CalculatorConfig::japan())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator. Reports are discarded unless a reporter was set.
    pub fn build(self) -> Result<FinancialCalculator, String> {
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(NoOpErrorReporter) as Arc<dyn ErrorReporter>);
        create_from_config(self.config, reporter)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
