//! Product sources.
//!
//! A [`ProductSource`] is whatever hands the storefront typed products: the
//! live Storefront API in production, a directory of recorded responses in
//! development and tests.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use woodshop_core::Product;

use crate::shopify::{
    GraphQLResponse, ProductData, ProductsData, ShopifyError, convert_product, convert_products,
};

/// Something that can look up products.
pub trait ProductSource: Send + Sync {
    /// Fetch one product by its URL handle.
    ///
    /// Fails with `ShopifyError::NotFound` when no product has the handle.
    fn product_by_handle(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<Product, ShopifyError>> + Send;

    /// Fetch the product listing.
    fn products(&self) -> impl Future<Output = Result<Vec<Product>, ShopifyError>> + Send;
}

/// Reads recorded Storefront API responses from disk.
///
/// Layout:
///
/// ```text
/// <root>/products.json            products(first:) response
/// <root>/products/<handle>.json   product(handle:) response
/// ```
///
/// Each file holds the full GraphQL envelope, `errors` included.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    /// Create a source rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The fixture directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn product_path(&self, handle: &str) -> Option<PathBuf> {
        let valid = !handle.is_empty()
            && handle
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.root.join("products").join(format!("{handle}.json")))
    }
}

impl ProductSource for FixtureSource {
    async fn product_by_handle(&self, handle: &str) -> Result<Product, ShopifyError> {
        let Some(path) = self.product_path(handle) else {
            tracing::warn!(handle, "Rejected malformed product handle");
            return Err(ShopifyError::NotFound(handle.to_string()));
        };

        let envelope: GraphQLResponse<ProductData> = read_envelope(&path)
            .await?
            .ok_or_else(|| ShopifyError::NotFound(handle.to_string()))?;
        let payload = envelope
            .into_data()?
            .product
            .ok_or_else(|| ShopifyError::NotFound(handle.to_string()))?;

        let product = convert_product(payload)?;
        tracing::debug!(
            handle,
            variants = product.variants.len(),
            images = product.images.len(),
            "Loaded product fixture"
        );
        Ok(product)
    }

    async fn products(&self) -> Result<Vec<Product>, ShopifyError> {
        let path = self.root.join("products.json");
        let Some(envelope) = read_envelope::<ProductsData>(&path).await? else {
            tracing::debug!(path = %path.display(), "No product listing fixture");
            return Ok(Vec::new());
        };

        let products = convert_products(envelope.into_data()?)?;
        tracing::debug!(count = products.len(), "Loaded product listing fixture");
        Ok(products)
    }
}

/// Read and decode an envelope. `Ok(None)` if the file does not exist.
async fn read_envelope<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<GraphQLResponse<T>>, ShopifyError> {
    let json = match tokio::fs::read_to_string(path).await {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&json)?))
}
