//! Description parsing commands.
//!
//! # Usage
//!
//! ```bash
//! # Paragraph sections using the configured language
//! wsh-cli sections stolik-kawowy
//!
//! # Paragraph sections with Polish headers
//! wsh-cli sections stolik-kawowy -l PL
//!
//! # Label/value entries
//! wsh-cli labels stolik-kawowy
//! ```

use serde::Serialize;
use woodshop_core::{DescriptionSections, LabelValueSections, Language, parse_description, parse_label_values};
use woodshop_storefront::AppError;

use super::{Context, print_json};

#[derive(Serialize)]
struct SectionsOutput<'a> {
    handle: &'a str,
    language: Language,
    sections: DescriptionSections,
}

#[derive(Serialize)]
struct LabelsOutput<'a> {
    handle: &'a str,
    labels: LabelValueSections,
}

/// Print the paragraph sections of a product description.
pub async fn sections(ctx: &Context, handle: &str, language: Option<Language>) -> Result<(), AppError> {
    let product = ctx.product(handle).await?;
    let language = language.unwrap_or(ctx.config.language);

    let sections = parse_description(&product.description_html, language);
    tracing::info!(handle, %language, counts = ?sections.counts(), "Parsed description");

    print_json(&SectionsOutput {
        handle,
        language,
        sections,
    })
}

/// Print the label/value entries of a product description.
pub async fn labels(ctx: &Context, handle: &str) -> Result<(), AppError> {
    let product = ctx.product(handle).await?;

    let labels = parse_label_values(&product.description_html);
    if labels.is_empty() {
        tracing::warn!(handle, "Description has no label/value markup");
    }

    print_json(&LabelsOutput { handle, labels })
}
