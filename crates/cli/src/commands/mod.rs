//! CLI command implementations.

pub mod describe;
pub mod preview;
pub mod render;

use serde::Serialize;
use woodshop_core::{Product, SelectedOption};
use woodshop_storefront::{AppError, FixtureSource, ProductSource, StorefrontConfig};

/// Shared state for every command.
pub struct Context {
    pub config: StorefrontConfig,
    pub source: FixtureSource,
}

impl Context {
    pub fn new(config: StorefrontConfig) -> Self {
        let source = FixtureSource::new(config.fixtures_dir.clone());
        Self { config, source }
    }

    /// Load a product by handle from the configured source.
    pub async fn product(&self, handle: &str) -> Result<Product, AppError> {
        tracing::info!(handle, fixtures = %self.source.root().display(), "Loading product");
        Ok(self.source.product_by_handle(handle).await?)
    }
}

/// Parse `name=value` into a selected option.
pub fn parse_selected_option(s: &str) -> Result<SelectedOption, String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return Err(format!("option name and value must not be empty in '{s}'"));
    }
    Ok(SelectedOption::new(name, value))
}

/// Print a value as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
