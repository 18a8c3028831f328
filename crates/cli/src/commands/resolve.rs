//! Resolve a product's listing price.
//!
//! # Usage
//!
//! ```bash
//! # Print the resolved price as JSON
//! vitrine resolve product.json
//!
//! # Prefer a currency and print the display string
//! vitrine resolve product.json --currency cur_eur --format
//!
//! # Read the product from stdin
//! cat product.json | vitrine resolve -
//! ```

use std::io::Write;

use tracing::info;
use vitrine_core::{CurrencyId, Product, ResolvedProductListingPrice, resolve_product_listing_price};

use crate::error::CliError;

/// Resolve the product at `path` and write the result to `out`.
///
/// # Errors
///
/// Returns an error if the product cannot be read or parsed, or if writing
/// fails.
pub fn run(
    path: &str,
    preferred_currency: Option<&CurrencyId>,
    display: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let product: Product = super::read_json(path)?;
    write_resolved(&product, preferred_currency, display, out)
}

fn write_resolved(
    product: &Product,
    preferred_currency: Option<&CurrencyId>,
    display: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let resolved = resolve_product_listing_price(product, preferred_currency);

    info!(
        product_id = ?product.id,
        has_price = resolved.has_price,
        uses_variant_pricing = resolved.uses_variant_pricing,
        "Resolved listing price"
    );

    if display {
        writeln!(out, "{}", display_line(&resolved))?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &resolved)?;
        writeln!(out)?;
    }
    Ok(())
}

/// One-line summary as a product card would show it.
fn display_line(resolved: &ResolvedProductListingPrice) -> String {
    let Some(price) = resolved.formatted_price() else {
        return "no price".to_owned();
    };

    let mut line = if resolved.uses_variant_pricing {
        format!("from {price}")
    } else {
        price
    };

    if let (Some(regular), Some(percent)) = (
        resolved.formatted_regular_price(),
        resolved.discount_percentage(),
    ) {
        line.push_str(&format!(" (was {regular}, -{percent}%)"));
    }
    line
}
