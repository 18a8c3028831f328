//! Vitrine Core - Pricing library for multi-tenant stores.
//!
//! This crate decides which price a product shows and how that price is
//! rendered. It is used by every surface that displays money:
//! - storefront listings and product pages
//! - admin product tables
//! - cart and checkout summaries
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Records arrive already fetched by the
//! persistence layer; malformed values degrade silently instead of failing a
//! page render.
//!
//! # Modules
//!
//! - [`types`] - Price, product and currency records, type-safe IDs, ISO codes
//! - [`pricing`] - Listing price resolution and currency-aware formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::*;
pub use types::*;
