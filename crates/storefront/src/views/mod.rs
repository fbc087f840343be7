//! View models for product templates.
//!
//! Views are plain serialisable structs built from core records. Templates
//! never touch `woodshop-core` types directly.

mod card;
mod product;

pub use card::ProductCardView;
pub use product::{DescriptionGroup, OptionValueView, OptionView, ProductDetailView, SectionView};

use core::fmt;

use serde::Serialize;
use woodshop_core::Image;

/// Browser image loading hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

impl fmt::Display for Loading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image display data for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub loading: Loading,
}

impl ImageView {
    /// View of `image`, using `fallback_alt` when it has no alt text.
    #[must_use]
    pub fn new(image: &Image, fallback_alt: &str, loading: Loading) -> Self {
        Self {
            url: image.url.clone(),
            alt: image.alt_or(fallback_alt).to_string(),
            width: image.width,
            height: image.height,
            loading,
        }
    }

    /// Same view with a different URL.
    #[must_use]
    pub fn with_url(mut self, url: String) -> Self {
        self.url = url;
        self
    }
}
