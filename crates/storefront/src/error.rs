//! Unified error handling.
//!
//! Provides a unified `AppError` type for callers that drive the whole
//! pipeline (load config, fetch a product, build views, render).

use thiserror::Error;
use woodshop_core::LanguageError;

use crate::config::ConfigError;
use crate::render::RenderError;
use crate::shopify::ShopifyError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or decoding a Shopify payload failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Unknown language tag.
    #[error("Language error: {0}")]
    Language(#[from] LanguageError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error means the requested product does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Shopify(ShopifyError::NotFound(_)))
    }
}
