//! Listing price resolution.
//!
//! A product card shows one price. For products with variants that is the
//! cheapest active variant's price ("from $30"); otherwise it is the
//! product's own price. Within one owner's price list the default-flagged
//! price wins, then the first one in list order. A preferred currency narrows
//! the choice but never turns a priced product into an unpriced one.

use serde::Serialize;

use crate::types::{Currency, CurrencyId, PriceRecord, Product, ProductVariant, to_number};

use super::format::{CurrencyDisplay, format_price};

/// The currency a resolved price is denominated in.
///
/// Price records carry either the joined currency row or just its id; the id
/// is kept as a plain string so it still renders (with the default format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedCurrency {
    Record(Currency),
    Code(String),
}

impl ResolvedCurrency {
    /// The formatter input for this currency.
    #[must_use]
    pub fn display(&self) -> CurrencyDisplay<'_> {
        match self {
            Self::Record(currency) => CurrencyDisplay::Format(&currency.format),
            Self::Code(code) => CurrencyDisplay::Code(code),
        }
    }
}

/// A usable price derived from one [`PriceRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCandidate {
    /// The price a shopper pays: the sale amount when present.
    pub effective_price: f64,
    /// The base amount, only set when a sale amount was present.
    pub regular_price: Option<f64>,
    pub currency: Option<ResolvedCurrency>,
    pub currency_id: Option<CurrencyId>,
    pub is_default: bool,
    pub tax_included: bool,
}

impl PriceCandidate {
    /// Derive a candidate, or `None` when the base amount is unusable.
    #[must_use]
    pub fn from_record(record: &PriceRecord) -> Option<Self> {
        let Some(amount) = to_number(record.amount.as_ref()) else {
            tracing::trace!(price_id = ?record.id, "skipping price without a usable amount");
            return None;
        };
        let sale = to_number(record.sale_amount.as_ref());

        let currency = record
            .currency
            .clone()
            .map(ResolvedCurrency::Record)
            .or_else(|| {
                record
                    .currency_id
                    .as_ref()
                    .map(|id| ResolvedCurrency::Code(id.to_string()))
            });

        Some(Self {
            effective_price: sale.unwrap_or(amount),
            regular_price: sale.map(|_| amount),
            currency,
            currency_id: record.effective_currency_id().cloned(),
            is_default: record.is_default,
            tax_included: record.tax_included,
        })
    }
}

/// Derive candidates from a price list, dropping unusable records.
#[must_use]
pub fn build_price_candidates(prices: &[PriceRecord]) -> Vec<PriceCandidate> {
    prices.iter().filter_map(PriceCandidate::from_record).collect()
}

/// Pick one candidate from a single owner's list.
///
/// With a preferred currency, only matching candidates are considered unless
/// none match. Among those, the first default-flagged candidate wins, else
/// the first one.
#[must_use]
pub fn select_price_candidate<'a>(
    candidates: &'a [PriceCandidate],
    preferred_currency_id: Option<&CurrencyId>,
) -> Option<&'a PriceCandidate> {
    let matching: Vec<&PriceCandidate> = preferred_currency_id
        .map(|preferred| {
            candidates
                .iter()
                .filter(|c| c.currency_id.as_ref() == Some(preferred))
                .collect()
        })
        .unwrap_or_default();

    let pool = if matching.is_empty() {
        if let Some(preferred) = preferred_currency_id {
            tracing::trace!(%preferred, "no price in preferred currency, using all prices");
        }
        candidates.iter().collect()
    } else {
        matching
    };

    pool.iter()
        .find(|c| c.is_default)
        .or_else(|| pool.first())
        .copied()
}

/// The price used for one variant, ignoring its active flag.
#[must_use]
pub fn resolve_variant_price(
    variant: &ProductVariant,
    preferred_currency_id: Option<&CurrencyId>,
) -> Option<PriceCandidate> {
    let candidates = build_price_candidates(&variant.prices);
    select_price_candidate(&candidates, preferred_currency_id).cloned()
}

/// The price shown for a product in listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProductListingPrice {
    /// Effective price; `0` when `has_price` is false.
    pub price: f64,
    /// Pre-discount price, only present alongside a sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<f64>,
    pub currency: Option<ResolvedCurrency>,
    /// False means "show no price", not "free".
    pub has_price: bool,
    /// True when the price is the cheapest active variant's.
    pub uses_variant_pricing: bool,
}

impl ResolvedProductListingPrice {
    /// The result for a product with nothing to show.
    #[must_use]
    pub const fn no_price() -> Self {
        Self {
            price: 0.0,
            regular_price: None,
            currency: None,
            has_price: false,
            uses_variant_pricing: false,
        }
    }

    fn from_candidate(candidate: PriceCandidate, uses_variant_pricing: bool) -> Self {
        Self {
            price: candidate.effective_price,
            regular_price: candidate.regular_price,
            currency: candidate.currency,
            has_price: true,
            uses_variant_pricing,
        }
    }

    /// Whether strike-through pricing should be shown.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.has_price && self.regular_price.is_some_and(|regular| regular > self.price)
    }

    /// Discount as a whole percentage of the regular price, e.g. `20` for
    /// `100 -> 80`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn discount_percentage(&self) -> Option<u32> {
        if !self.has_discount() {
            return None;
        }
        let regular = self.regular_price?;
        if regular <= 0.0 {
            return None;
        }
        Some(((regular - self.price) / regular * 100.0).round() as u32)
    }

    /// The formatter input for the resolved currency.
    #[must_use]
    pub fn currency_display(&self) -> CurrencyDisplay<'_> {
        self.currency
            .as_ref()
            .map_or(CurrencyDisplay::Default, ResolvedCurrency::display)
    }

    /// The display string for the price, or `None` when there is no price.
    #[must_use]
    pub fn formatted_price(&self) -> Option<String> {
        self.has_price
            .then(|| format_price(self.price, self.currency_display()))
    }

    /// The display string for the regular price when discounted.
    #[must_use]
    pub fn formatted_regular_price(&self) -> Option<String> {
        if !self.has_discount() {
            return None;
        }
        self.regular_price
            .map(|regular| format_price(regular, self.currency_display()))
    }
}

/// Resolve the listing price for a product.
///
/// Active variants (a missing flag counts as active) take precedence over
/// product-level prices; the lowest effective variant price wins, with ties
/// going to the first variant. Products with no usable price resolve to
/// [`ResolvedProductListingPrice::no_price`].
///
/// ```
/// use vitrine_core::{PriceRecord, Product, ProductVariant, resolve_product_listing_price};
///
/// let product = Product::new(vec![PriceRecord::new(50.0).as_default()]).with_variants(vec![
///     ProductVariant::new(vec![PriceRecord::new(40.0)]),
///     ProductVariant::new(vec![PriceRecord::new(30.0)]),
/// ]);
///
/// let resolved = resolve_product_listing_price(&product, None);
/// assert!(resolved.has_price);
/// assert!(resolved.uses_variant_pricing);
/// assert!((resolved.price - 30.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn resolve_product_listing_price(
    product: &Product,
    preferred_currency_id: Option<&CurrencyId>,
) -> ResolvedProductListingPrice {
    let cheapest_variant = product
        .variants
        .iter()
        .filter(|variant| variant.is_active())
        .filter_map(|variant| resolve_variant_price(variant, preferred_currency_id))
        .fold(None, |best: Option<PriceCandidate>, candidate| match best {
            Some(best) if best.effective_price <= candidate.effective_price => Some(best),
            _ => Some(candidate),
        });

    if let Some(candidate) = cheapest_variant {
        return ResolvedProductListingPrice::from_candidate(candidate, true);
    }

    let candidates = build_price_candidates(&product.prices);
    if let Some(candidate) = select_price_candidate(&candidates, preferred_currency_id) {
        return ResolvedProductListingPrice::from_candidate(candidate.clone(), false);
    }

    tracing::debug!(product_id = ?product.id, "product has no usable price");
    ResolvedProductListingPrice::no_price()
}
