// ============================================================================
// Currency Option
// Closed set of currencies and the locale each one is formatted with
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported currencies. The underlying value of each variant is the
/// `language_REGION` locale tag used to format amounts in that currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    /// Brazilian real, formatted as `pt_BR`
    BRL,
    /// US dollar, formatted as `en_US`
    USD,
    /// Euro, formatted as `fr_FR`
    EUR,
    /// Japanese yen, formatted as `ja_JP`
    JPY,
}

static LOCALE_LOOKUP: OnceLock<HashMap<&'static str, Currency>> = OnceLock::new();

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::BRL, Currency::USD, Currency::EUR, Currency::JPY];

    /// ISO 4217 code
    pub const fn code(self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::JPY => "JPY",
        }
    }

    /// Locale tag (`language_REGION`) used for formatting.
    pub const fn to_underlying_value(self) -> &'static str {
        match self {
            Currency::BRL => "pt_BR",
            Currency::USD => "en_US",
            Currency::EUR => "fr_FR",
            Currency::JPY => "ja_JP",
        }
    }

    /// Reverse lookup from a locale tag.
    pub fn from_underlying_value(tag: &str) -> Option<Self> {
        LOCALE_LOOKUP
            .get_or_init(|| {
                Self::ALL
                    .iter()
                    .map(|c| (c.to_underlying_value(), *c))
                    .collect()
            })
            .get(tag)
            .copied()
    }

    /// Digits after the decimal separator in money amounts.
    pub const fn minor_units(self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    /// Parse an ISO code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown currency code: {}", s))
    }
}
