//! Shopify Storefront API boundary.
//!
//! # Architecture
//!
//! - [`payload`] mirrors the Storefront API JSON as loosely as the API allows
//!   (both connection shapes, both option shapes, optional fields as `Option`)
//! - [`conversions`] turns payloads into `woodshop-core` records, parsing
//!   money amounts and defaulting what the API may omit
//! - Nothing past this module sees raw JSON
//!
//! # Example
//!
//! ```rust,ignore
//! use woodshop_storefront::shopify::{GraphQLResponse, ProductData, convert_product};
//!
//! let envelope: GraphQLResponse<ProductData> = serde_json::from_str(&json)?;
//! let product = envelope.into_data()?.product.ok_or(ShopifyError::NotFound(handle))?;
//! let product = convert_product(product)?;
//! ```

pub mod conversions;
pub mod payload;

pub use conversions::{convert_product, convert_products};
pub use payload::{GraphQLResponse, ProductData, ProductsData};

use core::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when reading Shopify payloads.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", describe_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a payload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The payload parsed but holds a value the storefront cannot use.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// One entry of an envelope's `errors` array.
///
/// Storefront API errors carry a message and, depending on the failure, a
/// response path, query locations and an `extensions.code` such as
/// `THROTTLED`. Every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
    #[serde(default)]
    pub path: Vec<PathSegment>,
    #[serde(default)]
    pub extensions: Option<GraphQLErrorExtensions>,
}

/// Position in the query document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GraphQLErrorLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQLErrorExtensions {
    pub code: Option<String>,
}

/// A response path step: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl GraphQLError {
    /// The machine-readable error code, e.g. `THROTTLED`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }
}

/// `Throttled [THROTTLED] at product.media (2:3)`
impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str("unspecified error")?;
        } else {
            f.write_str(&self.message)?;
        }
        if let Some(code) = self.code() {
            write!(f, " [{code}]")?;
        }
        for (i, segment) in self.path.iter().enumerate() {
            let sep = if i == 0 { " at " } else { "." };
            write!(f, "{sep}{segment}")?;
        }
        if let Some(loc) = self.locations.first() {
            write!(f, " ({}:{})", loc.line, loc.column)?;
        }
        Ok(())
    }
}

fn describe_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "response carried neither data nor errors".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
