//! HTML rendering command.

use woodshop_storefront::render::{render_card, render_description};
use woodshop_storefront::{AppError, HtmlPolicy, ProductCardView, ProductDetailView};

use super::Context;

/// Print the rendered description block (or card) of a product.
///
/// `--escaped` forces [`HtmlPolicy::Escaped`]; otherwise the configured
/// policy applies.
#[allow(clippy::print_stdout)]
pub async fn render(ctx: &Context, handle: &str, escaped: bool, card: bool) -> Result<(), AppError> {
    let product = ctx.product(handle).await?;

    let html = if card {
        render_card(&ProductCardView::build(&product, None, 0, &ctx.config))?
    } else {
        let policy = if escaped {
            HtmlPolicy::Escaped
        } else {
            ctx.config.description_html
        };
        tracing::debug!(handle, %policy, "Rendering description");
        let view = ProductDetailView::build(&product, &[], ctx.config.language);
        render_description(&view, policy)?
    };

    println!("{html}");
    Ok(())
}
