//! Product grid card.

use serde::Serialize;
use woodshop_core::{Product, Swatch, color_swatches};

use super::{ImageView, Loading};
use crate::config::StorefrontConfig;

/// Everything a product grid card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub handle: String,
    pub title: String,
    /// Product page link.
    pub url: String,
    pub primary_image: Option<ImageView>,
    /// Shown on hover.
    pub secondary_image: Option<ImageView>,
    /// Color chips; empty when the product has no color option.
    pub swatches: Vec<Swatch>,
    /// Selected color, if it is one of the swatches.
    pub selected_color: Option<String>,
    /// `129.00 PLN` or `99.00 - 149.00 PLN`.
    pub price: Option<String>,
}

impl ProductCardView {
    /// Build the card for the product at `position` in the grid.
    ///
    /// A selected color that the product does not offer is ignored.
    #[must_use]
    pub fn build(
        product: &Product,
        selected_color: Option<&str>,
        position: usize,
        config: &StorefrontConfig,
    ) -> Self {
        let swatches = color_swatches(&product.options, selected_color);
        let selected_color = selected_color.filter(|color| swatches.iter().any(|s| s.value == *color));

        let images = product.image_pair(selected_color);
        let primary_loading = if position < config.eager_image_count {
            Loading::Eager
        } else {
            Loading::Lazy
        };

        Self {
            handle: product.handle.clone(),
            title: product.title.clone(),
            url: format!("/products/{}", product.handle),
            primary_image: images
                .primary
                .map(|image| ImageView::new(image, &product.title, primary_loading)),
            secondary_image: images
                .secondary
                .map(|image| ImageView::new(image, &product.title, Loading::Lazy)),
            swatches,
            selected_color: selected_color.map(str::to_string),
            price: product.price_range.as_ref().map(ToString::to_string),
        }
    }
}
