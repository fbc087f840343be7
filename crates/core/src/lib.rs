//! Woodshop Core - domain types and pure storefront logic.
//!
//! This crate provides the pieces of the storefront that do not depend on the
//! Shopify transport or on a rendering layer. It is used by:
//! - `storefront` - decodes Storefront API payloads into these types and renders them
//! - `cli` - previews how product payloads are parsed and rendered
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no templates. Everything here can be called concurrently from any
//! number of rendering passes.
//!
//! # Modules
//!
//! - [`types`] - Typed product records (images, options, variants, money, language)
//! - [`description`] - Splits rich-text product descriptions into labeled sections
//! - [`variant`] - Color option discovery and variant-to-image resolution

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod description;
pub mod types;
pub mod variant;

pub use description::{
    DescriptionSections, HeaderMatcher, LabelValueSections, LanguageHeaders, SectionKey,
    parse_description, parse_description_with, parse_label_values,
};
pub use types::*;
pub use variant::{
    COLOR_OPTION_NAMES, ImagePair, Swatch, color_swatches, find_color_option,
    is_color_option_name, resolve_images,
};
