//! Product detail page.

use serde::Serialize;
use woodshop_core::{
    DescriptionSections, Language, Product, ProductVariant, SectionKey, SelectedOption,
    parse_description,
};

use super::{ImageView, Loading};

/// Width requested from the image CDN for gallery thumbnails.
pub const GALLERY_IMAGE_WIDTH: u32 = 800;

/// Description sections grouped the way the product page lays them out.
const PAGE_GROUPS: [&[SectionKey]; 5] = [
    &[SectionKey::Opis],
    &[SectionKey::Material],
    &[SectionKey::Kolor],
    &[SectionKey::Wymiary],
    &[SectionKey::Personalizacja, SectionKey::Uwagi],
];

/// One section of the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub key: SectionKey,
    /// HTML fragments in document order.
    pub fragments: Vec<String>,
}

/// Sections rendered together in one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionGroup {
    pub sections: Vec<SectionView>,
}

/// A product option with the selected value marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub name: String,
    pub values: Vec<OptionValueView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionValueView {
    pub value: String,
    pub selected: bool,
}

/// Everything the product page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub handle: String,
    pub title: String,
    pub vendor: Option<String>,
    pub language: Language,
    pub selected_variant_id: Option<String>,
    pub available_for_sale: bool,
    pub price: Option<String>,
    /// Only set when higher than `price`.
    pub compare_at_price: Option<String>,
    pub featured_image: Option<ImageView>,
    /// Product images other than the featured one, resized for thumbnails.
    pub gallery: Vec<ImageView>,
    pub options: Vec<OptionView>,
    /// Non-empty description groups in page order.
    pub description: Vec<DescriptionGroup>,
}

impl ProductDetailView {
    /// Build the page for a product and the options picked in the URL.
    #[must_use]
    pub fn build(product: &Product, selected_options: &[SelectedOption], language: Language) -> Self {
        let variant = product.selected_or_first_available_variant(selected_options);
        let sections = parse_description(&product.description_html, language);
        tracing::debug!(
            handle = %product.handle,
            %language,
            counts = ?sections.counts(),
            "Parsed description"
        );

        let featured = variant
            .and_then(|v| v.image.as_ref())
            .or_else(|| product.images.first());

        Self {
            handle: product.handle.clone(),
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            language,
            selected_variant_id: variant.map(|v| v.id.clone()),
            available_for_sale: variant.is_some_and(|v| v.available_for_sale),
            price: price(product, variant),
            compare_at_price: compare_at_price(variant),
            featured_image: featured.map(|image| ImageView::new(image, &product.title, Loading::Eager)),
            gallery: gallery(product, variant),
            options: options(product, variant),
            description: description_groups(&sections),
        }
    }
}

fn price(product: &Product, variant: Option<&ProductVariant>) -> Option<String> {
    variant
        .and_then(|v| v.price.as_ref())
        .map(ToString::to_string)
        .or_else(|| {
            product
                .price_range
                .as_ref()
                .map(|r| r.min_variant_price.to_string())
        })
}

fn compare_at_price(variant: Option<&ProductVariant>) -> Option<String> {
    let variant = variant?;
    let compare_at = variant.compare_at_price.as_ref()?;
    let is_higher = variant
        .price
        .as_ref()
        .is_none_or(|price| compare_at.amount > price.amount);
    is_higher.then(|| compare_at.to_string())
}

/// Images other than the selected variant's, resized for thumbnails.
fn gallery(product: &Product, variant: Option<&ProductVariant>) -> Vec<ImageView> {
    let selected_url = variant.and_then(|v| v.image.as_ref()).map(|i| i.url.as_str());

    product
        .images
        .iter()
        .filter(|image| Some(image.url.as_str()) != selected_url)
        .map(|image| {
            ImageView::new(image, &product.title, Loading::Lazy)
                .with_url(image.url_with_width(GALLERY_IMAGE_WIDTH))
        })
        .collect()
}

fn options(product: &Product, variant: Option<&ProductVariant>) -> Vec<OptionView> {
    product
        .options
        .iter()
        .map(|option| {
            let selected = variant.and_then(|v| v.option_value(&option.name));
            OptionView {
                name: option.name.clone(),
                values: option
                    .values
                    .iter()
                    .map(|value| OptionValueView {
                        value: value.clone(),
                        selected: selected == Some(value.as_str()),
                    })
                    .collect(),
            }
        })
        .collect()
}

fn description_groups(sections: &DescriptionSections) -> Vec<DescriptionGroup> {
    PAGE_GROUPS
        .iter()
        .map(|keys| DescriptionGroup {
            sections: sections
                .non_empty()
                .filter(|(key, _)| keys.contains(key))
                .map(|(key, fragments)| SectionView {
                    key,
                    fragments: fragments.to_vec(),
                })
                .collect(),
        })
        .filter(|group| !group.sections.is_empty())
        .collect()
}
