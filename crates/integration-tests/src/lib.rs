//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `listing_price` - Product documents, as the persistence layer
//!   serializes them, resolved end to end
//! - `price_formatting` - Resolved prices rendered for every currency shape
//!
//! This crate only hosts shared fixtures for those tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::{Value, json};
use vitrine_core::{Currency, Product};

/// Deserialize a product document.
///
/// # Panics
///
/// Panics if the document is not a valid product; fixtures are expected to
/// be well-formed.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product(value: Value) -> Product {
    serde_json::from_value(value).expect("fixture is a valid product")
}

/// Deserialize a currency document.
///
/// # Panics
///
/// Panics if the document is not a valid currency.
#[must_use]
#[allow(clippy::expect_used)]
pub fn currency(value: Value) -> Currency {
    serde_json::from_value(value).expect("fixture is a valid currency")
}

/// A US dollar store currency row.
#[must_use]
pub fn usd_json() -> Value {
    json!({
        "id": "cur_usd",
        "name": "US Dollar",
        "code": "USD",
        "symbol": "$",
        "symbolPosition": "before",
        "decimalSeparator": ".",
        "thousandsSeparator": ",",
        "decimalPlaces": 2,
        "isActive": true
    })
}

/// A Euro store currency row using continental separators.
#[must_use]
pub fn eur_json() -> Value {
    json!({
        "id": "cur_eur",
        "name": "Euro",
        "code": "EUR",
        "symbol": "€",
        "symbolPosition": "after",
        "decimalSeparator": ",",
        "thousandsSeparator": ".",
        "decimalPlaces": 2,
        "isActive": true
    })
}

/// A Chilean peso store currency row without decimals.
#[must_use]
pub fn clp_json() -> Value {
    json!({
        "id": "cur_clp",
        "name": "Peso chileno",
        "code": "CLP",
        "symbol": "$",
        "symbolPosition": "before",
        "decimalSeparator": ",",
        "thousandsSeparator": ".",
        "decimalPlaces": 0,
        "isActive": true
    })
}
