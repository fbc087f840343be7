//! Color option discovery and variant-to-image resolution.
//!
//! Product cards show a primary image that follows the shopper's color choice
//! and a secondary hover image that never changes. Everything here is a pure
//! lookup over borrowed product data.

mod color;
mod images;

pub use color::{COLOR_OPTION_NAMES, Swatch, color_swatches, find_color_option, is_color_option_name};
pub use images::{ImagePair, resolve_images};

use crate::types::Product;

impl Product {
    /// Card images for the given color selection.
    #[must_use]
    pub fn image_pair(&self, selected_color: Option<&str>) -> ImagePair<'_> {
        resolve_images(&self.images, &self.variants, selected_color)
    }
}
