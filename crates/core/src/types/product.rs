//! Product, option and variant records.

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::money::{Money, PriceRange};

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Kolor", "Size").
    pub name: String,
    /// Selected value (e.g., "Czerwony", "Large").
    pub value: String,
}

impl SelectedOption {
    /// Create a selected option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive comparison of both name and value.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        eq_ignore_case(&self.name, &other.name) && eq_ignore_case(&self.value, &other.value)
    }
}

/// Product option definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Kolor").
    pub name: String,
    /// Declared values in display order (e.g., `["Czerwony", "Zielony"]`).
    pub values: Vec<String>,
}

impl ProductOption {
    /// Create an option.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// Whether this variant is available for sale.
    pub available_for_sale: bool,
    /// Current price, when the query requested it.
    pub price: Option<Money>,
    /// Compare-at price (original price if on sale).
    pub compare_at_price: Option<Money>,
    /// Selected options for this variant.
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    pub image: Option<Image>,
}

impl ProductVariant {
    /// Value of the option called `name`, compared case-insensitively.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| eq_ignore_case(&o.name, name))
            .map(|o| o.value.as_str())
    }

    /// Whether every requested option is set on this variant.
    ///
    /// An empty request matches every variant.
    #[must_use]
    pub fn matches_all(&self, requested: &[SelectedOption]) -> bool {
        requested
            .iter()
            .all(|r| self.selected_options.iter().any(|o| o.matches(r)))
    }
}

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: String,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Rich-text description as delivered by the platform.
    pub description_html: String,
    /// Price range across variants, when the query requested it.
    pub price_range: Option<PriceRange>,
    /// Gallery images in display order.
    pub images: Vec<Image>,
    /// Product options.
    pub options: Vec<ProductOption>,
    /// Product variants in API order.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// The variant to show for a set of requested options.
    ///
    /// Picks the first variant carrying every requested option, then the
    /// first available variant, then the first variant at all.
    #[must_use]
    pub fn selected_or_first_available_variant(
        &self,
        requested: &[SelectedOption],
    ) -> Option<&ProductVariant> {
        let requested_match = if requested.is_empty() {
            None
        } else {
            self.variants.iter().find(|v| v.matches_all(requested))
        };

        requested_match
            .or_else(|| self.variants.iter().find(|v| v.available_for_sale))
            .or_else(|| self.variants.first())
    }
}

/// Unicode-aware case-insensitive equality.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
