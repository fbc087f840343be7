//! View model preview commands.

use woodshop_core::{Language, SelectedOption};
use woodshop_storefront::{AppError, ProductCardView, ProductDetailView, ProductSource};

use super::{Context, print_json};

/// Print the grid card of one product.
pub async fn card(
    ctx: &Context,
    handle: &str,
    color: Option<&str>,
    position: usize,
) -> Result<(), AppError> {
    let product = ctx.product(handle).await?;
    let card = ProductCardView::build(&product, color, position, &ctx.config);

    if color.is_some() && card.selected_color.is_none() {
        tracing::warn!(handle, color, "Product does not offer this color, ignoring it");
    }

    print_json(&card)
}

/// Print the product page view.
pub async fn product(
    ctx: &Context,
    handle: &str,
    options: &[SelectedOption],
    language: Option<Language>,
) -> Result<(), AppError> {
    let product = ctx.product(handle).await?;
    let view = ProductDetailView::build(&product, options, language.unwrap_or(ctx.config.language));

    print_json(&view)
}

/// Print every listed product as a card, in listing order.
pub async fn list(ctx: &Context, color: Option<&str>) -> Result<(), AppError> {
    let products = ctx.source.products().await?;
    tracing::info!(count = products.len(), "Loaded product listing");

    let cards: Vec<ProductCardView> = products
        .iter()
        .enumerate()
        .map(|(position, product)| ProductCardView::build(product, color, position, &ctx.config))
        .collect();

    print_json(&cards)
}
