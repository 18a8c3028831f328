//! Listing price resolution and price formatting.
//!
//! Both halves are pure functions over records that have already been
//! fetched, so they are safe to call from any render path.

pub mod format;
pub mod resolve;

pub use format::{CurrencyDisplay, format_price};
pub use resolve::{
    PriceCandidate, ResolvedCurrency, ResolvedProductListingPrice, build_price_candidates,
    resolve_product_listing_price, resolve_variant_price, select_price_candidate,
};
