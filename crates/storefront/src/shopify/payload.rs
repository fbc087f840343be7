//! Storefront API response payloads.
//!
//! These mirror the JSON the Storefront API returns for product queries. They
//! are deliberately permissive: every field a query may leave out is either
//! `Option` or defaulted, so one set of types covers the card, detail and
//! listing queries.

use serde::Deserialize;

use super::{GraphQLError, ShopifyError};

// =============================================================================
// Envelope
// =============================================================================

/// A GraphQL response: `{ "data": ..., "errors": [...] }`.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    /// Query result, absent when the query failed outright.
    pub data: Option<T>,
    /// Errors reported alongside (or instead of) data.
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

impl<T> GraphQLResponse<T> {
    /// The data, or the reported errors.
    ///
    /// Any reported error fails the whole response, even when partial data
    /// came back with it.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::GraphQL` if errors were reported or data is
    /// missing.
    pub fn into_data(self) -> Result<T, ShopifyError> {
        if !self.errors.is_empty() {
            return Err(ShopifyError::GraphQL(self.errors));
        }
        self.data.ok_or_else(|| ShopifyError::GraphQL(Vec::new()))
    }
}

/// `data` of a `product(handle:)` query.
#[derive(Debug, Deserialize)]
pub struct ProductData {
    /// `null` when no product has the handle.
    pub product: Option<ProductPayload>,
}

/// `data` of a `products(first:)` query.
#[derive(Debug, Deserialize)]
pub struct ProductsData {
    /// Product connection.
    pub products: Connection<ProductPayload>,
}

// =============================================================================
// Connections
// =============================================================================

/// A connection in either shape: `edges[].node` or `nodes[]`.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            nodes: Vec::new(),
        }
    }
}

impl<T> Connection<T> {
    /// All nodes, edges first.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges
            .into_iter()
            .map(|edge| edge.node)
            .chain(self.nodes)
            .collect()
    }

    /// Whether the connection holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }
}

// =============================================================================
// Products
// =============================================================================

/// A product as returned by the Storefront API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: Option<String>,
    #[serde(default)]
    pub description_html: Option<String>,
    pub price_range: Option<PriceRangePayload>,
    #[serde(default)]
    pub images: Option<Connection<ImagePayload>>,
    #[serde(default)]
    pub media: Option<Connection<MediaPayload>>,
    #[serde(default)]
    pub options: Vec<OptionPayload>,
    #[serde(default)]
    pub variants: Option<Connection<VariantPayload>>,
    pub selected_or_first_available_variant: Option<VariantPayload>,
}

/// `{ "amount": "129.0", "currencyCode": "PLN" }`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyPayload {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangePayload {
    pub min_variant_price: MoneyPayload,
    pub max_variant_price: MoneyPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub id: Option<String>,
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// A media node. Only image media carry `image`; videos and 3D models don't.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub image: Option<ImagePayload>,
}

/// A product option.
///
/// Older API versions return `values`, newer ones `optionValues[].name`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPayload {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub option_values: Vec<OptionValuePayload>,
}

#[derive(Debug, Deserialize)]
pub struct OptionValuePayload {
    pub name: String,
}

impl OptionPayload {
    /// Declared values from whichever shape the payload used.
    pub fn into_values(self) -> Vec<String> {
        if self.values.is_empty() {
            self.option_values.into_iter().map(|v| v.name).collect()
        } else {
            self.values
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub available_for_sale: Option<bool>,
    pub price: Option<MoneyPayload>,
    pub compare_at_price: Option<MoneyPayload>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionPayload>,
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOptionPayload {
    pub name: String,
    pub value: String,
}
