//! Core types for Vitrine.
//!
//! This module provides the records the persistence layer hands to the
//! pricing code, plus type-safe wrappers for ids and currency codes.

pub mod currency;
pub mod id;
pub mod iso;
pub mod numeric;
pub mod product;

pub use currency::{Currency, CurrencyFormat, CurrencyFormatError, SymbolPosition};
pub use id::*;
pub use iso::{CurrencyCodeError, IsoCode, IsoCurrency};
pub use numeric::{NumericValue, to_number};
pub use product::{PriceRecord, Product, ProductVariant};
