//! Store currencies and their display rules.

use serde::{Deserialize, Serialize};

use super::id::CurrencyId;

/// Errors that can occur when building a [`CurrencyFormat`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyFormatError {
    /// The symbol is empty.
    #[error("currency symbol cannot be empty")]
    EmptySymbol,
    /// Too many decimal places.
    #[error("decimal places must be at most {max}, got {actual}")]
    TooManyDecimalPlaces {
        /// Maximum allowed decimal places.
        max: u8,
        /// Requested decimal places.
        actual: u8,
    },
    /// Decimal and thousands separators are the same character.
    #[error("decimal and thousands separators must differ (both are {0:?})")]
    SeparatorClash(char),
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Before,
    After,
}

/// How amounts in a store currency are rendered.
///
/// Values built through [`CurrencyFormat::new`] are validated. Values
/// deserialized from storage are trusted as-is, since the admin surface
/// validated them when they were saved.
///
/// ## Examples
///
/// ```
/// use vitrine_core::{CurrencyFormat, SymbolPosition};
///
/// let euro = CurrencyFormat::new("€", SymbolPosition::After, ',', '.', 2).unwrap();
/// assert_eq!(euro.decimal_separator(), ',');
///
/// assert!(CurrencyFormat::new("$", SymbolPosition::Before, '.', '.', 2).is_err());
/// assert!(CurrencyFormat::new("$", SymbolPosition::Before, '.', ',', 7).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    symbol: String,
    symbol_position: SymbolPosition,
    decimal_separator: char,
    thousands_separator: char,
    decimal_places: u8,
}

impl CurrencyFormat {
    /// Maximum number of decimal places a store currency may use.
    pub const MAX_DECIMAL_PLACES: u8 = 6;

    /// Create a validated currency format.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty, if `decimal_places` exceeds
    /// [`Self::MAX_DECIMAL_PLACES`], or if both separators are the same
    /// character.
    pub fn new(
        symbol: impl Into<String>,
        symbol_position: SymbolPosition,
        decimal_separator: char,
        thousands_separator: char,
        decimal_places: u8,
    ) -> Result<Self, CurrencyFormatError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(CurrencyFormatError::EmptySymbol);
        }
        if decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(CurrencyFormatError::TooManyDecimalPlaces {
                max: Self::MAX_DECIMAL_PLACES,
                actual: decimal_places,
            });
        }
        if decimal_separator == thousands_separator {
            return Err(CurrencyFormatError::SeparatorClash(decimal_separator));
        }

        Ok(Self {
            symbol,
            symbol_position,
            decimal_separator,
            thousands_separator,
            decimal_places,
        })
    }

    /// The currency symbol, e.g. `$` or `Bs.`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn symbol_position(&self) -> SymbolPosition {
        self.symbol_position
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    #[must_use]
    pub const fn thousands_separator(&self) -> char {
        self.thousands_separator
    }

    #[must_use]
    pub const fn decimal_places(&self) -> u8 {
        self.decimal_places
    }
}

impl Default for CurrencyFormat {
    /// US-style dollars: `$1,234.56`.
    fn default() -> Self {
        Self {
            symbol: "$".to_owned(),
            symbol_position: SymbolPosition::Before,
            decimal_separator: '.',
            thousands_separator: ',',
            decimal_places: 2,
        }
    }
}

/// A currency configured by a store.
///
/// Codes are ISO-like but not guaranteed unique across stores; the `id` is
/// the stable reference used by price records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: CurrencyId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(flatten)]
    pub format: CurrencyFormat,
    /// Disabled currencies are kept for existing prices but hidden from
    /// new product forms.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl Currency {
    /// Create an active currency.
    #[must_use]
    pub fn new(
        id: impl Into<CurrencyId>,
        name: impl Into<String>,
        code: impl Into<String>,
        format: CurrencyFormat,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            format,
            is_active: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_format() {
        let fmt = CurrencyFormat::new("Bs.", SymbolPosition::Before, ',', '.', 2).unwrap();
        assert_eq!(fmt.symbol(), "Bs.");
        assert_eq!(fmt.thousands_separator(), '.');
        assert_eq!(fmt.decimal_places(), 2);
    }

    #[test]
    fn test_new_rejects_empty_symbol() {
        assert_eq!(
            CurrencyFormat::new("", SymbolPosition::Before, '.', ',', 2),
            Err(CurrencyFormatError::EmptySymbol)
        );
    }

    #[test]
    fn test_new_rejects_too_many_places() {
        assert!(matches!(
            CurrencyFormat::new("$", SymbolPosition::Before, '.', ',', 7),
            Err(CurrencyFormatError::TooManyDecimalPlaces { max: 6, actual: 7 })
        ));
        assert!(CurrencyFormat::new("$", SymbolPosition::Before, '.', ',', 6).is_ok());
    }

    #[test]
    fn test_new_rejects_separator_clash() {
        assert_eq!(
            CurrencyFormat::new("$", SymbolPosition::Before, ',', ',', 2),
            Err(CurrencyFormatError::SeparatorClash(','))
        );
    }

    #[test]
    fn test_default_format() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.symbol(), "$");
        assert_eq!(fmt.symbol_position(), SymbolPosition::Before);
        assert_eq!(fmt.decimal_separator(), '.');
        assert_eq!(fmt.thousands_separator(), ',');
    }

    #[test]
    fn test_currency_deserialize_flat_record() {
        let json = r#"{
            "id": "cur_eur",
            "name": "Euro",
            "code": "EUR",
            "symbol": "€",
            "symbolPosition": "after",
            "decimalSeparator": ",",
            "thousandsSeparator": ".",
            "decimalPlaces": 2
        }"#;
        let currency: Currency = serde_json::from_str(json).unwrap();
        assert_eq!(currency.id.as_str(), "cur_eur");
        assert_eq!(currency.format.symbol_position(), SymbolPosition::After);
        assert_eq!(currency.format.decimal_separator(), ',');
        assert!(currency.is_active);
    }

    #[test]
    fn test_currency_serialize_is_flat_camel_case() {
        let currency = Currency::new("cur_usd", "US Dollar", "USD", CurrencyFormat::default());
        let value = serde_json::to_value(&currency).unwrap();
        assert_eq!(value["symbol"], "$");
        assert_eq!(value["symbolPosition"], "before");
        assert_eq!(value["decimalPlaces"], 2);
        assert_eq!(value["isActive"], true);
    }
}
