//! Product image reference.

use serde::{Deserialize, Serialize};

/// A product or variant image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Shopify image ID.
    pub id: Option<String>,
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Image width in pixels.
    pub width: Option<i64>,
    /// Image height in pixels.
    pub height: Option<i64>,
}

impl Image {
    /// Create an image with only a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }

    /// Set the alt text.
    #[must_use]
    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Returns the alt text, or `fallback` when the image has none.
    ///
    /// Blank alt text counts as missing.
    #[must_use]
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback)
    }

    /// Returns the image URL with a `width` transform parameter appended.
    ///
    /// Shopify CDN URLs usually carry a `?v=` cache buster already, so the
    /// separator depends on whether a query string is present.
    #[must_use]
    pub fn url_with_width(&self, width: u32) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{separator}width={width}", self.url)
    }
}
