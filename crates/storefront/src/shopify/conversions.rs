//! Payload to core record conversions.

use std::str::FromStr;

use rust_decimal::Decimal;
use woodshop_core::{
    Image, Money, PriceRange, Product, ProductOption, ProductVariant, SelectedOption,
};

use super::ShopifyError;
use super::payload::{
    Connection, ImagePayload, MediaPayload, MoneyPayload, OptionPayload, PriceRangePayload,
    ProductPayload, ProductsData, VariantPayload,
};

/// Convert a product payload.
///
/// # Errors
///
/// Returns `ShopifyError::InvalidPayload` if a money amount is not a decimal.
pub fn convert_product(product: ProductPayload) -> Result<Product, ShopifyError> {
    let images = gallery_images(product.images, product.media, &product.handle);

    let mut variants = product
        .variants
        .map(|connection| connection.into_nodes())
        .unwrap_or_default()
        .into_iter()
        .map(convert_variant)
        .collect::<Result<Vec<_>, _>>()?;

    let fallback = product
        .selected_or_first_available_variant
        .filter(|_| variants.is_empty());
    if let Some(variant) = fallback {
        tracing::debug!(
            handle = %product.handle,
            "No variant connection, using selectedOrFirstAvailableVariant"
        );
        variants.push(convert_variant(variant)?);
    }

    Ok(Product {
        id: product.id,
        handle: product.handle,
        title: product.title,
        vendor: product.vendor,
        description_html: product.description_html.unwrap_or_default(),
        price_range: product.price_range.map(convert_price_range).transpose()?,
        images,
        options: product.options.into_iter().map(convert_option).collect(),
        variants,
    })
}

/// Convert a `products` query result.
///
/// # Errors
///
/// Returns the first product conversion error.
pub fn convert_products(data: ProductsData) -> Result<Vec<Product>, ShopifyError> {
    data.products
        .into_nodes()
        .into_iter()
        .map(convert_product)
        .collect()
}

/// Gallery from `images`, falling back to image media.
fn gallery_images(
    images: Option<Connection<ImagePayload>>,
    media: Option<Connection<MediaPayload>>,
    handle: &str,
) -> Vec<Image> {
    if let Some(images) = images.filter(|c| !c.is_empty()) {
        return images.into_nodes().into_iter().map(convert_image).collect();
    }

    let Some(media) = media else {
        return Vec::new();
    };
    let media = media.into_nodes();
    let total = media.len();
    let images: Vec<Image> = media
        .into_iter()
        .filter_map(|m| m.image)
        .map(convert_image)
        .collect();

    if images.len() < total {
        tracing::debug!(
            handle,
            skipped = total - images.len(),
            "Skipped media without an image"
        );
    }
    images
}

fn convert_image(i: ImagePayload) -> Image {
    Image {
        id: i.id,
        url: i.url,
        alt_text: i.alt_text,
        width: i.width,
        height: i.height,
    }
}

fn convert_money(m: MoneyPayload) -> Result<Money, ShopifyError> {
    let amount = Decimal::from_str(m.amount.trim()).map_err(|e| {
        ShopifyError::InvalidPayload(format!("amount '{}' is not a decimal: {e}", m.amount))
    })?;
    Ok(Money::new(amount, m.currency_code))
}

fn convert_price_range(r: PriceRangePayload) -> Result<PriceRange, ShopifyError> {
    Ok(PriceRange {
        min_variant_price: convert_money(r.min_variant_price)?,
        max_variant_price: convert_money(r.max_variant_price)?,
    })
}

fn convert_option(o: OptionPayload) -> ProductOption {
    ProductOption {
        name: o.name.clone(),
        values: o.into_values(),
    }
}

fn convert_variant(v: VariantPayload) -> Result<ProductVariant, ShopifyError> {
    Ok(ProductVariant {
        id: v.id,
        title: v.title,
        available_for_sale: v.available_for_sale.unwrap_or(true),
        price: v.price.map(convert_money).transpose()?,
        compare_at_price: v.compare_at_price.map(convert_money).transpose()?,
        selected_options: v
            .selected_options
            .into_iter()
            .map(|o| SelectedOption::new(o.name, o.value))
            .collect(),
        image: v.image.map(convert_image),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(json: &str) -> Result<Product, ShopifyError> {
        convert_product(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_full_product() {
        let p = product(
            r#"{
                "id": "gid://shopify/Product/1",
                "handle": "stolik-kawowy",
                "title": "Stolik kawowy",
                "vendor": "Woodshop",
                "descriptionHtml": "<p>Intro</p>",
                "priceRange": {
                    "minVariantPrice": {"amount": "99.0", "currencyCode": "PLN"},
                    "maxVariantPrice": {"amount": "149.0", "currencyCode": "PLN"}
                },
                "images": {"edges": [
                    {"node": {"url": "https://cdn.example.com/a.jpg", "altText": "Front", "width": 800, "height": 600}},
                    {"node": {"url": "https://cdn.example.com/b.jpg"}}
                ]},
                "options": [{"name": "Kolor", "optionValues": [{"name": "Dąb"}, {"name": "Orzech"}]}],
                "variants": {"nodes": [
                    {
                        "id": "gid://shopify/ProductVariant/1",
                        "title": "Dąb",
                        "availableForSale": false,
                        "price": {"amount": "99.0", "currencyCode": "PLN"},
                        "selectedOptions": [{"name": "Kolor", "value": "Dąb"}],
                        "image": {"url": "https://cdn.example.com/dab.jpg"}
                    },
                    {"id": "gid://shopify/ProductVariant/2", "title": "Orzech"}
                ]}
            }"#,
        )
        .unwrap();

        assert_eq!(p.description_html, "<p>Intro</p>");
        assert_eq!(p.images.len(), 2);
        assert_eq!(p.images[0].alt_text.as_deref(), Some("Front"));
        assert_eq!(p.options[0].values, ["Dąb", "Orzech"]);
        assert_eq!(p.variants.len(), 2);
        assert!(!p.variants[0].available_for_sale);
        assert!(p.variants[1].available_for_sale);
        assert_eq!(
            p.variants[0].price.as_ref().map(|m| m.amount),
            Some(Decimal::new(99, 0))
        );
        assert_eq!(
            p.price_range.map(|r| r.to_string()).as_deref(),
            Some("99.00 - 149.00 PLN")
        );
    }

    #[test]
    fn test_media_fallback() {
        let p = product(
            r#"{
                "id": "1", "handle": "h", "title": "T",
                "media": {"nodes": [
                    {"image": {"url": "https://cdn.example.com/a.jpg"}},
                    {"previewImage": {"url": "https://cdn.example.com/video.jpg"}},
                    {"image": {"url": "https://cdn.example.com/b.jpg"}}
                ]}
            }"#,
        )
        .unwrap();

        let urls: Vec<&str> = p.images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(urls, ["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"]);
    }

    #[test]
    fn test_images_preferred_over_media() {
        let p = product(
            r#"{
                "id": "1", "handle": "h", "title": "T",
                "images": {"nodes": [{"url": "https://cdn.example.com/image.jpg"}]},
                "media": {"nodes": [{"image": {"url": "https://cdn.example.com/media.jpg"}}]}
            }"#,
        )
        .unwrap();

        assert_eq!(p.images.len(), 1);
        assert_eq!(p.images[0].url, "https://cdn.example.com/image.jpg");
    }

    #[test]
    fn test_selected_variant_used_without_connection() {
        let p = product(
            r#"{
                "id": "1", "handle": "h", "title": "T",
                "selectedOrFirstAvailableVariant": {"id": "v1", "selectedOptions": [{"name": "Kolor", "value": "Dąb"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(p.variants.len(), 1);
        assert_eq!(p.variants[0].option_value("kolor"), Some("Dąb"));
    }

    #[test]
    fn test_minimal_product_defaults() {
        let p = product(r#"{"id": "1", "handle": "h", "title": "T"}"#).unwrap();

        assert!(p.description_html.is_empty());
        assert!(p.images.is_empty());
        assert!(p.variants.is_empty());
        assert!(p.price_range.is_none());
    }

    #[test]
    fn test_malformed_amount() {
        let err = product(
            r#"{
                "id": "1", "handle": "h", "title": "T",
                "variants": {"nodes": [{"id": "v1", "price": {"amount": "12,50", "currencyCode": "PLN"}}]}
            }"#,
        )
        .unwrap_err();

        assert!(matches!(err, ShopifyError::InvalidPayload(ref msg) if msg.contains("12,50")));
    }
}
