//! Product, variant and price records as handed over by the persistence
//! layer.
//!
//! These are input shapes: every field the resolver can live without is
//! optional, and JSON `null` is accepted wherever a default exists.

use serde::{Deserialize, Deserializer};

use super::currency::Currency;
use super::id::{CurrencyId, PriceId, ProductId, VariantId};
use super::numeric::NumericValue;

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A monetary quote for a product or a variant in one currency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    #[serde(default)]
    pub id: Option<PriceId>,
    /// Base amount.
    #[serde(default)]
    pub amount: Option<NumericValue>,
    /// Discounted amount, only meaningful when below `amount`.
    #[serde(default)]
    pub sale_amount: Option<NumericValue>,
    #[serde(default)]
    pub currency_id: Option<CurrencyId>,
    /// Embedded currency record, when the query joined it.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Marks the preferred currency for the owning product or variant.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax_included: bool,
}

impl PriceRecord {
    /// Create a price with a base amount and nothing else.
    #[must_use]
    pub fn new(amount: impl Into<NumericValue>) -> Self {
        Self {
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    /// Set the sale amount.
    #[must_use]
    pub fn with_sale(mut self, sale_amount: impl Into<NumericValue>) -> Self {
        self.sale_amount = Some(sale_amount.into());
        self
    }

    /// Reference a currency by id only.
    #[must_use]
    pub fn with_currency_id(mut self, currency_id: impl Into<CurrencyId>) -> Self {
        self.currency_id = Some(currency_id.into());
        self
    }

    /// Embed a currency record, also filling `currency_id` when unset.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        if self.currency_id.is_none() {
            self.currency_id = Some(currency.id.clone());
        }
        self.currency = Some(currency);
        self
    }

    /// Flag this price as the default one.
    #[must_use]
    pub const fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// The currency id used for preference matching.
    ///
    /// Falls back to the embedded record's id when only the record is set.
    #[must_use]
    pub fn effective_currency_id(&self) -> Option<&CurrencyId> {
        self.currency_id
            .as_ref()
            .or_else(|| self.currency.as_ref().map(|c| &c.id))
    }
}

/// A purchasable variation of a product (size, colour...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default)]
    pub id: Option<VariantId>,
    #[serde(default)]
    pub name: Option<String>,
    /// `None` means the flag was not loaded; such variants count as active.
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<PriceRecord>,
}

impl ProductVariant {
    /// Create an active variant with the given prices.
    #[must_use]
    pub fn new(prices: Vec<PriceRecord>) -> Self {
        Self {
            prices,
            ..Self::default()
        }
    }

    /// Set the active flag explicitly.
    #[must_use]
    pub const fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Only an explicit `false` disables a variant.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active != Some(false)
    }
}

/// A catalog entry with its own prices and its variants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prices: Vec<PriceRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a product with product-level prices and no variants.
    #[must_use]
    pub fn new(prices: Vec<PriceRecord>) -> Self {
        Self {
            prices,
            ..Self::default()
        }
    }

    /// Attach variants.
    #[must_use]
    pub fn with_variants(mut self, variants: Vec<ProductVariant>) -> Self {
        self.variants = variants;
        self
    }
}
