// ============================================================================
// Calculator Configuration
// Default currency and host-registered locale formats
// ============================================================================

use crate::domain::{Currency, LocaleFormat, LocaleTag};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`FinancialCalculator`](crate::engine::FinancialCalculator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Currency used by `format_money_default`
    pub default_currency: Currency,

    /// Extra locales for `format_currency`. A custom entry with the same tag
    /// as a bundled locale replaces it.
    pub custom_locales: Vec<LocaleFormat>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::USD,
            custom_locales: Vec::new(),
        }
    }
}

impl CalculatorConfig {
    pub fn new(default_currency: Currency) -> Self {
        Self {
            default_currency,
            custom_locales: Vec::new(),
        }
    }

    /// Builder method: Set default currency
    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    /// Builder method: Register a locale format
    pub fn with_locale(mut self, format: LocaleFormat) -> Self {
        self.custom_locales.push(format);
        self
    }

    /// Resolve a locale tag, custom formats first.
    pub fn find_locale(&self, tag: &LocaleTag) -> Option<LocaleFormat> {
        let key = tag.to_string();
        self.custom_locales
            .iter()
            .find(|f| f.tag == key)
            .cloned()
            .or_else(|| LocaleFormat::find_bundled(tag))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for format in &self.custom_locales {
            format.validate()?;
            if !seen.insert(format.tag.as_str()) {
                return Err(format!("Locale {} registered more than once", format.tag));
            }
        }
        Ok(())
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Brazilian real as default currency
    pub fn brazil() -> Self {
        Self::new(Currency::BRL)
    }

    /// US dollar as default currency
    pub fn united_states() -> Self {
        Self::new(Currency::USD)
    }

    /// Euro as default currency
    pub fn eurozone() -> Self {
        Self::new(Currency::EUR)
    }

    /// Japanese yen as default currency
    pub fn japan() -> Self {
        Self::new(Currency::JPY)
    }
}
