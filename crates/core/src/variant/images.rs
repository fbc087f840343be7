//! Primary/secondary card image resolution.

use serde::Serialize;

use super::color::is_color_option_name;
use crate::types::product::eq_ignore_case;
use crate::types::{Image, ProductVariant};

/// Images for a product card. `None` means the image is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImagePair<'a> {
    /// Main image; follows the selected color when a variant provides one.
    pub primary: Option<&'a Image>,
    /// Hover image; always the second gallery image.
    pub secondary: Option<&'a Image>,
}

/// Pick card images for a color selection.
///
/// The secondary image is always `images[1]`. The primary image is the image
/// of the first variant (in list order) whose color option equals
/// `selected_color` ignoring case, falling back to `images[0]` when there is
/// no selection, no matching variant or the match has no image.
#[must_use]
pub fn resolve_images<'a>(
    images: &'a [Image],
    variants: &'a [ProductVariant],
    selected_color: Option<&str>,
) -> ImagePair<'a> {
    let secondary = images.get(1);

    let variant_image = selected_color.and_then(|color| {
        variants
            .iter()
            .find(|v| has_color(v, color))
            .and_then(|v| v.image.as_ref())
    });

    ImagePair {
        primary: variant_image.or_else(|| images.first()),
        secondary,
    }
}

fn has_color(variant: &ProductVariant, color: &str) -> bool {
    variant
        .selected_options
        .iter()
        .any(|o| is_color_option_name(&o.name) && eq_ignore_case(&o.value, color))
}
