// ============================================================================
// Locale Formats
// Number and money formatting conventions per language_REGION tag
// ============================================================================

use crate::domain::Currency;
use crate::numeric::{CalcResult, CalculatorError};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// U+00A0, used between a number and a currency symbol.
pub const NO_BREAK_SPACE: char = '\u{00A0}';

/// U+202F, the French digit group separator.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202F}';

// ============================================================================
// Locale Tag
// ============================================================================

/// A `language_REGION` pair such as `pt_BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    pub language: String,
    pub region: String,
}

impl LocaleTag {
    /// Split a composite tag on `_` and keep the first two parts.
    ///
    /// An empty language selects the root locale. Parts after the region
    /// are ignored.
    ///
    /// # Errors
    /// `MalformedLocaleTag` when there is no region, or either part contains
    /// anything but ASCII letters.
    pub fn parse(tag: &str) -> CalcResult<Self> {
        let malformed = || CalculatorError::MalformedLocaleTag(tag.to_string());

        let mut parts = tag.split('_');
        let language = parts.next().unwrap_or_default();
        let region = parts.next().ok_or_else(malformed)?;

        let letters = |part: &str| part.chars().all(|c| c.is_ascii_alphabetic());
        if region.is_empty() || !letters(language) || !letters(region) {
            return Err(malformed());
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region: region.to_ascii_uppercase(),
        })
    }

    /// Whether the tag names the root locale (no language).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }
}

impl FromStr for LocaleTag {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.region)
    }
}

// ============================================================================
// Locale Format
// ============================================================================

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymbolPlacement {
    /// `$1,234.56`
    Prefix,
    /// `R$ 1.234,56`
    PrefixSpaced,
    /// `1 234,56 €`
    SuffixSpaced,
}

/// Formatting conventions for one locale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocaleFormat {
    /// Composite `language_REGION` tag
    pub tag: String,

    /// Digit group separator
    pub grouping_separator: char,

    /// Separator between integer and fractional digits
    pub decimal_separator: char,

    /// Digits per group (3 for all bundled locales)
    pub group_size: usize,

    /// Symbol of the locale's own currency
    pub currency_symbol: String,

    /// Symbol position in money strings
    pub symbol_placement: SymbolPlacement,
}

impl LocaleFormat {
    /// Create a format with `.` decimals, `,` grouping and a prefixed symbol.
    pub fn new(tag: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            grouping_separator: ',',
            decimal_separator: '.',
            group_size: 3,
            currency_symbol: currency_symbol.into(),
            symbol_placement: SymbolPlacement::Prefix,
        }
    }

    /// Builder method: Set both separators
    pub fn with_separators(mut self, grouping: char, decimal: char) -> Self {
        self.grouping_separator = grouping;
        self.decimal_separator = decimal;
        self
    }

    /// Builder method: Set group size
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Builder method: Set symbol placement
    pub fn with_symbol_placement(mut self, placement: SymbolPlacement) -> Self {
        self.symbol_placement = placement;
        self
    }

    /// Validate the format
    pub fn validate(&self) -> Result<(), String> {
        let tag = LocaleTag::parse(&self.tag).map_err(|e| e.to_string())?;
        if tag.to_string() != self.tag {
            return Err(format!("Locale {}: tag must be written as {}", self.tag, tag));
        }

        if self.grouping_separator == self.decimal_separator {
            return Err(format!(
                "Locale {}: grouping and decimal separators must differ",
                self.tag
            ));
        }

        if self.group_size == 0 {
            return Err(format!("Locale {}: group size must be positive", self.tag));
        }

        if self.currency_symbol.is_empty() {
            return Err(format!("Locale {}: currency symbol cannot be empty", self.tag));
        }

        Ok(())
    }
}

// ============================================================================
// Bundled Locales
// ============================================================================

impl LocaleFormat {
    /// Brazilian Portuguese: `R$ 1.234,56`
    pub fn pt_br() -> Self {
        Self::new("pt_BR", "R$")
            .with_separators('.', ',')
            .with_symbol_placement(SymbolPlacement::PrefixSpaced)
    }

    /// US English: `$1,234.56`
    pub fn en_us() -> Self {
        Self::new("en_US", "$")
    }

    /// French: `1 234,56 €` with narrow no-break space grouping
    pub fn fr_fr() -> Self {
        Self::new("fr_FR", "€")
            .with_separators(NARROW_NO_BREAK_SPACE, ',')
            .with_symbol_placement(SymbolPlacement::SuffixSpaced)
    }

    /// Japanese: `￥1,235`
    pub fn ja_jp() -> Self {
        Self::new("ja_JP", "￥")
    }

    /// German: `1.234,56 €`
    pub fn de_de() -> Self {
        Self::new("de_DE", "€")
            .with_separators('.', ',')
            .with_symbol_placement(SymbolPlacement::SuffixSpaced)
    }

    /// British English: `£1,234.56`
    pub fn en_gb() -> Self {
        Self::new("en_GB", "£")
    }

    /// Every bundled locale
    pub fn bundled() -> Vec<Self> {
        vec![
            Self::pt_br(),
            Self::en_us(),
            Self::fr_fr(),
            Self::ja_jp(),
            Self::de_de(),
            Self::en_gb(),
        ]
    }

    /// Look up a bundled locale by parsed tag.
    pub fn find_bundled(tag: &LocaleTag) -> Option<Self> {
        let tag = tag.to_string();
        Self::bundled().into_iter().find(|f| f.tag == tag)
    }

    /// The locale a currency is formatted with.
    pub fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::BRL => Self::pt_br(),
            Currency::USD => Self::en_us(),
            Currency::EUR => Self::fr_fr(),
            Currency::JPY => Self::ja_jp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        let tag = LocaleTag::parse("pt_BR").unwrap();
        assert_eq!(tag.language, "pt");
        assert_eq!(tag.region, "BR");
        assert_eq!(tag.to_string(), "pt_BR");

        // Case is normalized
        assert_eq!(LocaleTag::parse("EN_us").unwrap().to_string(), "en_US");
    }

    #[test]
    fn test_parse_malformed_tag() {
        for tag in ["ptBR", "", "pt_", "p1_BR", "pt_B2"] {
            assert_eq!(
                LocaleTag::parse(tag),
                Err(CalculatorError::MalformedLocaleTag(tag.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_ignores_trailing_parts() {
        let tag = LocaleTag::parse("pt_BR_x").unwrap();
        assert_eq!(tag.to_string(), "pt_BR");
    }

    #[test]
    fn test_parse_empty_language_is_root() {
        let tag = LocaleTag::parse("_BR").unwrap();
        assert!(tag.is_root());
        assert_eq!(tag.region, "BR");
        assert!(!LocaleTag::parse("pt_BR").unwrap().is_root());
    }

    #[test]
    fn test_bundled_formats_validate() {
        for format in LocaleFormat::bundled() {
            assert!(format.validate().is_ok(), "{} should validate", format.tag);
        }
    }

    #[test]
    fn test_currency_locales_match_currency_tags() {
        for currency in Currency::ALL {
            assert_eq!(
                LocaleFormat::for_currency(currency).tag,
                currency.to_underlying_value()
            );
        }
    }

    #[test]
    fn test_validation() {
        let same_separators = LocaleFormat::new("xx_YY", "¤").with_separators(',', ',');
        assert!(same_separators.validate().is_err());

        let no_groups = LocaleFormat::new("xx_YY", "¤").with_group_size(0);
        assert!(no_groups.validate().is_err());

        let bad_tag = LocaleFormat::new("xxYY", "¤");
        assert!(bad_tag.validate().is_err());

        // Lookups compare canonical tags
        let lowercase_region = LocaleFormat::new("xx_yy", "¤");
        assert!(lowercase_region.validate().is_err());
    }
}
