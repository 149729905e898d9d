// ============================================================================
// Locale Formatting
// Digit grouping for integer amounts and money strings for currencies
// ============================================================================

use crate::domain::locale::NO_BREAK_SPACE;
use crate::domain::{CalculatorConfig, Currency, LocaleFormat, LocaleTag, SymbolPlacement};
use crate::numeric::{CalcResult, CalculatorError};
use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// CLDR root number symbols are those of `en`.
const ROOT_LOCALE: Locale = Locale::en;

/// Insert `separator` between groups of `group_size` digits, from the right.
/// A zero group size disables grouping.
fn group_digits(digits: &str, separator: char, group_size: usize) -> String {
    if group_size == 0 {
        return digits.to_string();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + len / group_size * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % group_size == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Format an integer with the locale's digit grouping and no decimals.
pub fn format_integer(amount: i64, format: &LocaleFormat) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = group_digits(&digits, format.grouping_separator, format.group_size);
    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// CLDR locale for a tag: `language-REGION` first, then the bare language.
fn cldr_locale(tag: &LocaleTag) -> Option<Locale> {
    if tag.is_root() {
        return Some(ROOT_LOCALE);
    }
    let regional = format!("{}-{}", tag.language, tag.region);
    Locale::from_name(regional.as_str())
        .or_else(|_| Locale::from_name(tag.language.as_str()))
        .ok()
}

/// Format an integer amount for a `language_REGION` tag.
///
/// Only number grouping is applied, no symbol. The tag is resolved against
/// the custom locales in `config`, then the bundled ones, then CLDR data.
///
/// # Errors
/// - `MalformedLocaleTag` when the tag is not `language_REGION`
/// - `UnsupportedLocale` when no format is known for the tag
pub fn format_currency(amount: i64, tag: &str, config: &CalculatorConfig) -> CalcResult<String> {
    let locale = LocaleTag::parse(tag)?;
    if let Some(format) = config.find_locale(&locale) {
        return Ok(format_integer(amount, &format));
    }

    let cldr = cldr_locale(&locale)
        .ok_or_else(|| CalculatorError::UnsupportedLocale(tag.to_string()))?;
    tracing::trace!(tag, cldr = cldr.name(), "formatting with CLDR locale");
    Ok(amount.to_formatted_string(&cldr))
}

/// Format a decimal with a fixed number of fraction digits in the given
/// locale. Rounds half away from zero.
pub fn format_decimal(amount: Decimal, format: &LocaleFormat, fraction_digits: u32) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(fraction_digits);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let plain = rounded.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, format.grouping_separator, format.group_size));
    if !frac_part.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

/// Money string in the currency's own locale, rounded to its minor units.
///
/// ```
/// use financial_calculator::domain::Currency;
/// use financial_calculator::engine::formatting::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(123456, 2), Currency::USD), "$1,234.56");
/// assert_eq!(format_money(Decimal::new(12345, 1), Currency::JPY), "￥1,235");
/// ```
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    let format = LocaleFormat::for_currency(currency);
    let number = format_decimal(amount, &format, currency.minor_units());

    // Sign goes in front of the symbol
    let (sign, magnitude) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let symbol = &format.currency_symbol;
    match format.symbol_placement {
        SymbolPlacement::Prefix => format!("{}{}{}", sign, symbol, magnitude),
        SymbolPlacement::PrefixSpaced => {
            format!("{}{}{}{}", sign, symbol, NO_BREAK_SPACE, magnitude)
        },
        SymbolPlacement::SuffixSpaced => {
            format!("{}{}{}{}", sign, magnitude, NO_BREAK_SPACE, symbol)
        },
    }
}
