//! Loosely-typed numeric input coming from the persistence layer.
//!
//! Price amounts reach us in whatever shape the data source produced: native
//! JSON numbers, serialized decimal strings (`"19.99"`), or arbitrary
//! precision [`Decimal`] values read straight from the database. Everything
//! funnels through [`NumericValue::to_number`], which never fails: a value
//! that cannot be read as a finite number yields `None`.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// A numeric-like value as received from storage or the wire.
///
/// Deserialization is untagged and accepts any JSON value, so a malformed
/// amount never rejects the surrounding record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    /// A native floating point number.
    Number(f64),
    /// An arbitrary precision decimal.
    Decimal(Decimal),
    /// A string that may or may not hold a number.
    Text(String),
    /// Any other shape (booleans, arrays, objects).
    Unsupported(IgnoredAny),
}

impl NumericValue {
    /// Coerce to a finite `f64`.
    ///
    /// Strings are trimmed before parsing; empty strings, `NaN` and
    /// infinities are rejected.
    ///
    /// ```
    /// use vitrine_core::NumericValue;
    ///
    /// assert_eq!(NumericValue::from("19.99").to_number(), Some(19.99));
    /// assert_eq!(NumericValue::from("abc").to_number(), None);
    /// assert_eq!(NumericValue::from(f64::NAN).to_number(), None);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            // Round-trip through the canonical string so the result is the
            // nearest f64, matching how the same amount parses as text.
            Self::Decimal(d) => d.to_string().parse::<f64>().ok()?,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            Self::Unsupported(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// Coerce an optional numeric field, treating a missing value as `None`.
#[must_use]
pub fn to_number(value: Option<&NumericValue>) -> Option<f64> {
    value.and_then(NumericValue::to_number)
}

impl From<f64> for NumericValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for NumericValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Decimal> for NumericValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<&str> for NumericValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for NumericValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_number_passthrough() {
        assert_eq!(NumericValue::from(42.5).to_number(), Some(42.5));
        assert_eq!(NumericValue::from(7_i64).to_number(), Some(7.0));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        assert_eq!(NumericValue::from(f64::INFINITY).to_number(), None);
        assert_eq!(NumericValue::from(f64::NEG_INFINITY).to_number(), None);
        assert_eq!(NumericValue::from(f64::NAN).to_number(), None);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(NumericValue::from("100").to_number(), Some(100.0));
        assert_eq!(NumericValue::from(" 12.50 ").to_number(), Some(12.5));
        assert_eq!(NumericValue::from("1e3").to_number(), Some(1000.0));
    }

    #[test]
    fn test_unparseable_strings() {
        assert_eq!(NumericValue::from("").to_number(), None);
        assert_eq!(NumericValue::from("   ").to_number(), None);
        assert_eq!(NumericValue::from("twelve").to_number(), None);
        assert_eq!(NumericValue::from("NaN").to_number(), None);
        assert_eq!(NumericValue::from("inf").to_number(), None);
    }

    #[test]
    fn test_decimal_values() {
        let d = Decimal::from_str("1999.99").unwrap();
        assert_eq!(NumericValue::from(d).to_number(), Some(1999.99));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(to_number(None), None);
        assert_eq!(to_number(Some(&NumericValue::from(3.0))), Some(3.0));
    }

    #[test]
    fn test_deserialize_any_shape() {
        let values: Vec<NumericValue> =
            serde_json::from_str(r#"[10, "19.99", "oops", true, {"a": 1}, [1]]"#).unwrap();
        let numbers: Vec<Option<f64>> = values.iter().map(NumericValue::to_number).collect();
        assert_eq!(
            numbers,
            vec![Some(10.0), Some(19.99), None, None, None, None]
        );
    }
}
