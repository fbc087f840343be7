//! Core types for Woodshop.
//!
//! Typed records for the product data the storefront renders. Optional
//! fields are explicit `Option`s; decoding from the Storefront API happens in
//! the storefront crate, never here.

pub mod image;
pub mod language;
pub mod money;
pub mod product;

pub use image::Image;
pub use language::{Language, LanguageError};
pub use money::{Money, PriceRange};
pub use product::{Product, ProductOption, ProductVariant, SelectedOption};
