//! Woodshop Storefront library.
//!
//! The boundary between the Shopify Storefront API and the pure logic in
//! `woodshop-core`: payload decoding, product sources, view models and the
//! HTML partials that render them.
//!
//! # Modules
//!
//! - [`shopify`] - Storefront API payload types, conversions and errors
//! - [`source`] - Where products come from (`ProductSource`, `FixtureSource`)
//! - [`views`] - Card and detail view models built from core records
//! - [`render`] - Askama partials and the description HTML policy
//! - [`config`] - Environment configuration
//! - [`logging`] - Tracing subscriber setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod shopify;
pub mod source;
pub mod views;

pub use config::{ConfigError, StorefrontConfig};
pub use error::AppError;
pub use render::{HtmlPolicy, RenderError};
pub use shopify::ShopifyError;
pub use source::{FixtureSource, ProductSource};
pub use views::{ProductCardView, ProductDetailView};
