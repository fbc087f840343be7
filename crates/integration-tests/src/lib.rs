//! Integration tests for Woodshop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p woodshop-integration-tests
//! ```
//!
//! # Fixtures
//!
//! `fixtures/` holds recorded Storefront API responses in the layout
//! `FixtureSource` reads:
//!
//! - `products.json` - product listing
//! - `products/stolik-kawowy.json` - Polish paragraph-header description, color variants, media gallery
//! - `products/komoda.json` - label/value description markup
//! - `products/deska.json` - English description, legacy option shape, edge connections
//! - `products/wycofany.json` - `product: null`
//! - `products/przeciazenie.json` - GraphQL error envelope
//!
//! # Test Categories
//!
//! - `description` - both description parsers over real payloads
//! - `product_pages` - detail views and rendering
//! - `cards` - grid cards and the listing

use std::path::PathBuf;

use woodshop_storefront::FixtureSource;

/// Directory holding the recorded fixtures.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// A product source over the recorded fixtures.
#[must_use]
pub fn fixture_source() -> FixtureSource {
    FixtureSource::new(fixtures_dir())
}
