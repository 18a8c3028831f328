//! Display formatting for prices.
//!
//! [`format_price`] is called while rendering listings, product pages, admin
//! tables and cart sheets, so it never fails: anything it cannot make sense
//! of is rendered as US dollars with two decimals.
//!
//! Whole amounts are shown without their zero fraction (`$10` rather than
//! `$10.00`). For store currencies the configured separator followed by
//! `decimal_places` zeros is removed wherever it appears; for the default
//! and ISO code paths only the first `.00`/`,00` group that is not followed
//! by another digit is removed.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{CurrencyFormat, IsoCode, IsoCurrency, SymbolPosition};

/// The currency shape a price is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay<'a> {
    /// No currency information: US dollars.
    #[default]
    Default,
    /// A bare string. ISO codes get locale-aware formatting; anything else
    /// (such as a currency record id) falls back to the default.
    Code(&'a str),
    /// A store currency's own formatting rules.
    Format(&'a CurrencyFormat),
}

impl<'a> From<&'a CurrencyFormat> for CurrencyDisplay<'a> {
    fn from(format: &'a CurrencyFormat) -> Self {
        Self::Format(format)
    }
}

impl<'a> From<&'a str> for CurrencyDisplay<'a> {
    fn from(code: &'a str) -> Self {
        Self::Code(code)
    }
}

/// Format an amount for display.
///
/// ```
/// use vitrine_core::{CurrencyDisplay, CurrencyFormat, format_price};
///
/// assert_eq!(format_price(1234.5, CurrencyDisplay::Default), "$1234.50");
/// assert_eq!(format_price(10.0, CurrencyDisplay::Default), "$10");
/// assert_eq!(format_price(1234.5, CurrencyDisplay::Code("usd")), "$1,234.50");
/// assert_eq!(format_price(10.0, CurrencyDisplay::Code("clx0cur")), "$10");
///
/// let usd = CurrencyFormat::default();
/// assert_eq!(format_price(1_234_567.0, CurrencyDisplay::Format(&usd)), "$1,234,567");
/// ```
#[must_use]
pub fn format_price(amount: f64, currency: CurrencyDisplay<'_>) -> String {
    match currency {
        CurrencyDisplay::Default => strip_zero_cents(&default_format(amount)),
        CurrencyDisplay::Code(code) => {
            let formatted = match IsoCode::parse(code).ok().and_then(|c| c.currency()) {
                Some(iso) => format_iso(amount, &iso),
                None => {
                    tracing::debug!(code, "unrecognized currency code, using default format");
                    default_format(amount)
                }
            };
            strip_zero_cents(&formatted)
        }
        CurrencyDisplay::Format(format) => format_with_store_currency(amount, format),
    }
}

fn default_format(amount: f64) -> String {
    format!("${}", to_fixed(amount, 2))
}

/// en-US currency formatting: `-$1,234.50`, `CHF 10.00`, `¥1,235`.
fn format_iso(amount: f64, iso: &IsoCurrency) -> String {
    let fixed = to_fixed(amount, iso.minor_units);
    let (sign, unsigned) = fixed
        .strip_prefix('-')
        .map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = split_fraction(unsigned);

    let mut out = format!("{sign}{}{}", iso.prefix(), group_thousands(int_part, ','));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn format_with_store_currency(amount: f64, format: &CurrencyFormat) -> String {
    let places = format.decimal_places();
    let fixed = to_fixed(amount, places);
    let (sign, unsigned) = fixed
        .strip_prefix('-')
        .map_or(("", fixed.as_str()), |rest| ("-", rest));
    let (int_part, frac_part) = split_fraction(unsigned);

    let mut number = format!("{sign}{}", group_thousands(int_part, format.thousands_separator()));
    if let Some(frac) = frac_part {
        number.push(format.decimal_separator());
        number.push_str(frac);
    }

    let formatted = match format.symbol_position() {
        SymbolPosition::Before => format!("{}{number}", format.symbol()),
        SymbolPosition::After => format!("{number}{}", format.symbol()),
    };

    if places == 0 {
        return formatted;
    }
    let zero_fraction = format!(
        "{}{}",
        format.decimal_separator(),
        "0".repeat(usize::from(places))
    );
    formatted.replace(&zero_fraction, "")
}

/// Render `amount` with exactly `places` fraction digits.
///
/// Rounds half away from zero on the exact binary value, so `1.005` (stored
/// as `1.00499...`) becomes `1.00` and `0.125` becomes `0.13`. The sign comes
/// from the input, not the rounded result: `-0.0` renders as `0.00` and
/// `-0.001` as `-0.00`.
fn to_fixed(amount: f64, places: u8) -> String {
    let width = usize::from(places);
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let digits = Decimal::from_f64_retain(magnitude).map_or_else(
        || format!("{magnitude:.width$}"),
        |exact| {
            let rounded = exact.round_dp_with_strategy(
                u32::from(places),
                RoundingStrategy::MidpointAwayFromZero,
            );
            format!("{rounded:.width$}")
        },
    );
    format!("{sign}{digits}")
}

fn split_fraction(unsigned: &str) -> (&str, Option<&str>) {
    match unsigned.split_once('.') {
        Some((int_part, frac)) if !frac.is_empty() => (int_part, Some(frac)),
        Some((int_part, _)) => (int_part, None),
        None => (unsigned, None),
    }
}

/// Insert `separator` between every group of three digits, from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3 * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Remove the first `.00` or `,00` that is not followed by another digit.
fn strip_zero_cents(formatted: &str) -> String {
    let bytes = formatted.as_bytes();
    let hit = (0..bytes.len()).find(|&i| {
        matches!(bytes.get(i), Some(b'.' | b','))
            && bytes.get(i + 1) == Some(&b'0')
            && bytes.get(i + 2) == Some(&b'0')
            && !bytes.get(i + 3).is_some_and(u8::is_ascii_digit)
    });

    let mut out = formatted.to_owned();
    if let Some(i) = hit {
        out.replace_range(i..i + 3, "");
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_format(
        symbol: &str,
        position: SymbolPosition,
        decimal: char,
        thousands: char,
        places: u8,
    ) -> CurrencyFormat {
        CurrencyFormat::new(symbol, position, decimal, thousands, places).unwrap()
    }

    #[test]
    fn test_default_keeps_nonzero_fraction() {
        assert_eq!(format_price(1234.5, CurrencyDisplay::Default), "$1234.50");
        assert_eq!(format_price(10.5, CurrencyDisplay::Default), "$10.50");
        assert_eq!(format_price(0.99, CurrencyDisplay::Default), "$0.99");
    }

    #[test]
    fn test_default_strips_zero_cents() {
        assert_eq!(format_price(10.0, CurrencyDisplay::Default), "$10");
        assert_eq!(format_price(0.0, CurrencyDisplay::Default), "$0");
        assert_eq!(format_price(9.999, CurrencyDisplay::Default), "$10");
    }

    #[test]
    fn test_default_does_not_group() {
        assert_eq!(format_price(1_000_000.0, CurrencyDisplay::Default), "$1000000");
    }

    #[test]
    fn test_iso_code_formatting() {
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("USD")), "$10");
        assert_eq!(format_price(1234.56, CurrencyDisplay::Code("usd")), "$1,234.56");
        assert_eq!(format_price(1000.0, CurrencyDisplay::Code(" EUR ")), "€1,000");
        assert_eq!(format_price(-5.5, CurrencyDisplay::Code("GBP")), "-£5.50");
        assert_eq!(format_price(1234.5, CurrencyDisplay::Code("JPY")), "¥1,235");
        assert_eq!(format_price(12.3, CurrencyDisplay::Code("CHF")), "CHF\u{a0}12.30");
        assert_eq!(format_price(1.5, CurrencyDisplay::Code("KWD")), "KWD\u{a0}1.500");
    }

    #[test]
    fn test_iso_code_never_empty() {
        assert!(!format_price(10.0, CurrencyDisplay::Code("USD")).is_empty());
    }

    #[test]
    fn test_unrecognized_strings_fall_back() {
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("not-a-code")), "$10");
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("clx1c2v3b")), "$10");
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("QQQ")), "$10");
        assert_eq!(format_price(10.25, CurrencyDisplay::Code("")), "$10.25");
    }

    #[test]
    fn test_store_currency_zero_places() {
        let usd = store_format("$", SymbolPosition::Before, '.', ',', 0);
        assert_eq!(format_price(10.0, CurrencyDisplay::Format(&usd)), "$10");
        assert_eq!(format_price(1234.5, CurrencyDisplay::Format(&usd)), "$1,235");
    }

    #[test]
    fn test_store_currency_grouping() {
        let usd = store_format("$", SymbolPosition::Before, '.', ',', 2);
        assert_eq!(format_price(1_234_567.0, CurrencyDisplay::Format(&usd)), "$1,234,567");
        assert_eq!(format_price(1_234_567.5, CurrencyDisplay::Format(&usd)), "$1,234,567.50");
        assert_eq!(format_price(999.0, CurrencyDisplay::Format(&usd)), "$999");
        assert_eq!(format_price(-1234.0, CurrencyDisplay::Format(&usd)), "$-1,234");
    }

    #[test]
    fn test_store_currency_symbol_after() {
        let eur = store_format("€", SymbolPosition::After, ',', '.', 2);
        assert_eq!(format_price(1234.5, CurrencyDisplay::Format(&eur)), "1.234,50€");
        assert_eq!(format_price(1234.0, CurrencyDisplay::Format(&eur)), "1.234€");
    }

    #[test]
    fn test_store_currency_multi_char_symbol() {
        let ves = store_format("Bs.", SymbolPosition::Before, ',', '.', 2);
        assert_eq!(format_price(2500.75, CurrencyDisplay::Format(&ves)), "Bs.2.500,75");
    }

    #[test]
    fn test_store_currency_three_places() {
        let kwd = store_format("KD", SymbolPosition::Before, '.', ',', 3);
        assert_eq!(format_price(1.5, CurrencyDisplay::Format(&kwd)), "KD1.500");
        assert_eq!(format_price(2.0, CurrencyDisplay::Format(&kwd)), "KD2");
    }

    #[test]
    fn test_store_currency_strips_every_occurrence() {
        // Stored records skip validation; with identical separators every
        // thousands group of zeros looks like a zero fraction too.
        let clash: CurrencyFormat = serde_json::from_str(
            r#"{"symbol":"$","symbolPosition":"before","decimalSeparator":".","thousandsSeparator":".","decimalPlaces":3}"#,
        )
        .unwrap();
        assert_eq!(format_price(1_000_000.0, CurrencyDisplay::Format(&clash)), "$1");
        assert_eq!(format_price(1_000_000.5, CurrencyDisplay::Format(&clash)), "$1.500");
    }

    #[test]
    fn test_store_currency_from_deserialized_record() {
        let format: CurrencyFormat = serde_json::from_str(
            r#"{"symbol":"S/","symbolPosition":"before","decimalSeparator":".","thousandsSeparator":",","decimalPlaces":2}"#,
        )
        .unwrap();
        assert_eq!(format_price(49.9, CurrencyDisplay::Format(&format)), "S/49.90");
    }

    #[test]
    fn test_to_fixed_rounds_like_javascript() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(10.0, 2), "10.00");
        assert_eq!(to_fixed(1e30, 2), format!("{:.2}", 1e30));
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.004, 0), "-0");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(format_price(-0.0, CurrencyDisplay::Default), "$0");
        assert_eq!(format_price(-0.0, CurrencyDisplay::Code("USD")), "$0");
        let usd = store_format("$", SymbolPosition::Before, '.', ',', 2);
        assert_eq!(format_price(-0.0, CurrencyDisplay::Format(&usd)), "$0");
    }

    #[test]
    fn test_tiny_negative_keeps_its_sign() {
        assert_eq!(format_price(-0.001, CurrencyDisplay::Default), "$-0");
        assert_eq!(format_price(-0.001, CurrencyDisplay::Code("USD")), "-$0");
    }

    #[test]
    fn test_iso_codes_without_narrow_symbol() {
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("HNL")), "HNL\u{a0}10");
        assert_eq!(format_price(10.5, CurrencyDisplay::Code("qar")), "QAR\u{a0}10.50");
        assert_eq!(format_price(1234.0, CurrencyDisplay::Code("BDT")), "BDT\u{a0}1,234");
        for code in ["NIO", "GHS", "LKR", "PAB", "HTG"] {
            assert!(!format_price(10.0, CurrencyDisplay::Code(code)).starts_with('$'));
        }
        assert_eq!(format_price(10.0, CurrencyDisplay::Code("XCD")), "EC$10");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ','), "1");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", ','), "1,234");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
        assert_eq!(group_thousands("123456", '\''), "123'456");
    }

    #[test]
    fn test_strip_zero_cents_only_first_tail_group() {
        assert_eq!(strip_zero_cents("$1,000.00"), "$1,000");
        assert_eq!(strip_zero_cents("$10.50"), "$10.50");
        assert_eq!(strip_zero_cents("$10,00"), "$10");
        assert_eq!(strip_zero_cents("$10.005"), "$10.005");
        assert_eq!(strip_zero_cents("CHF\u{a0}5.00"), "CHF\u{a0}5");
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let eur = store_format("€", SymbolPosition::After, ',', '.', 2);
        for display in [
            CurrencyDisplay::Default,
            CurrencyDisplay::Code("EUR"),
            CurrencyDisplay::Format(&eur),
        ] {
            assert_eq!(format_price(4321.09, display), format_price(4321.09, display));
        }
    }
}
