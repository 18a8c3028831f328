//! ISO 4217 currency codes and their en-US display conventions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`IsoCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyCodeError {
    /// The input string is empty.
    #[error("currency code cannot be empty")]
    Empty,
    /// The input is not exactly three characters long.
    #[error("currency code must be 3 letters, got {0} characters")]
    InvalidLength(usize),
    /// The input contains something other than ASCII letters.
    #[error("currency code must contain only ASCII letters")]
    NonAlphabetic,
}

/// A well-formed three-letter currency code, stored uppercase.
///
/// ```
/// use vitrine_core::IsoCode;
///
/// let code = IsoCode::parse(" usd ").unwrap();
/// assert_eq!(code.as_str(), "USD");
/// assert!(code.currency().is_some());
///
/// assert!(IsoCode::parse("clx9abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoCode([u8; 3]);

impl IsoCode {
    /// Parse a currency code, ignoring surrounding whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns an error unless the trimmed input is exactly three ASCII
    /// letters.
    pub fn parse(s: &str) -> Result<Self, CurrencyCodeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CurrencyCodeError::Empty);
        }

        let len = trimmed.chars().count();
        if len != 3 {
            return Err(CurrencyCodeError::InvalidLength(len));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::NonAlphabetic);
        }

        let bytes: [u8; 3] = trimmed
            .as_bytes()
            .try_into()
            .map_err(|_| CurrencyCodeError::NonAlphabetic)?;

        Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        core::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Look up display conventions for this code.
    ///
    /// Returns `None` for well-formed codes that are not known currencies.
    #[must_use]
    pub fn currency(&self) -> Option<IsoCurrency> {
        rusty_money::iso::find(self.as_str()).map(IsoCurrency::from_iso)
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IsoCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IsoCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IsoCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// en-US display conventions for a known currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoCurrency {
    /// Uppercase ISO 4217 code.
    pub code: &'static str,
    /// Narrow symbol, or `None` when en-US shows the code instead.
    pub symbol: Option<&'static str>,
    /// Number of fraction digits shown.
    pub minor_units: u8,
}

impl IsoCurrency {
    /// Display conventions for an ISO 4217 currency.
    fn from_iso(currency: &'static rusty_money::iso::Currency) -> Self {
        let code = currency.iso_alpha_code;
        Self {
            code,
            symbol: narrow_symbol(code),
            minor_units: u8::try_from(currency.exponent).unwrap_or(2),
        }
    }

    /// The prefix placed before the number.
    ///
    /// Currencies without a narrow symbol are prefixed by their code and a
    /// non-breaking space (`CHF 10.00`).
    #[must_use]
    pub fn prefix(&self) -> String {
        self.symbol
            .map_or_else(|| format!("{}\u{a0}", self.code), str::to_owned)
    }
}

/// Symbols en-US shows in place of the code.
const NARROW_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("CAD", "CA$"),
    ("MXN", "MX$"),
    ("BRL", "R$"),
    ("XCD", "EC$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("AUD", "A$"),
    ("CNY", "CN¥"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("VND", "₫"),
    ("XAF", "FCFA\u{a0}"),
    ("XOF", "F\u{a0}CFA\u{a0}"),
    ("XPF", "CFPF\u{a0}"),
];

fn narrow_symbol(code: &str) -> Option<&'static str> {
    NARROW_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
}
