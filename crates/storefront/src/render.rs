//! HTML partials for product views.
//!
//! Description fragments come from the commerce platform's rich-text editor
//! and carry inline markup. [`HtmlPolicy`] decides whether that markup is
//! emitted as-is or escaped; the parser itself never sanitises anything.

use core::fmt;
use std::str::FromStr;

use askama::Template;
use serde::Serialize;
use thiserror::Error;

use crate::views::{DescriptionGroup, ProductCardView, ProductDetailView};

/// Rendering a template failed.
#[derive(Debug, Error)]
#[error("Template error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// How description fragments are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlPolicy {
    /// Emit fragments verbatim. The platform is the only author.
    #[default]
    Trusted,
    /// Escape fragments so inline markup shows as text.
    Escaped,
}

impl HtmlPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::Escaped => "escaped",
        }
    }
}

impl fmt::Display for HtmlPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HtmlPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trusted" => Ok(Self::Trusted),
            "escaped" => Ok(Self::Escaped),
            other => Err(format!("expected 'trusted' or 'escaped', got '{other}'")),
        }
    }
}

/// Product description block.
#[derive(Template)]
#[template(path = "partials/product_description.html")]
pub struct ProductDescriptionTemplate<'a> {
    pub groups: &'a [DescriptionGroup],
    pub trusted: bool,
}

/// Product grid card.
#[derive(Template)]
#[template(path = "partials/product_card.html")]
pub struct ProductCardTemplate<'a> {
    pub card: &'a ProductCardView,
}

/// Render the description block of a product page.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_description(view: &ProductDetailView, policy: HtmlPolicy) -> Result<String, RenderError> {
    let template = ProductDescriptionTemplate {
        groups: &view.description,
        trusted: policy == HtmlPolicy::Trusted,
    };
    Ok(template.render()?)
}

/// Render a product grid card.
///
/// # Errors
///
/// Returns `RenderError` if the template fails to render.
pub fn render_card(card: &ProductCardView) -> Result<String, RenderError> {
    Ok(ProductCardTemplate { card }.render()?)
}
