//! Woodshop CLI - preview how product payloads are parsed and rendered.
//!
//! # Usage
//!
//! ```bash
//! # Description sections of a product, with Polish headers
//! wsh-cli sections stolik-kawowy --language PL
//!
//! # Label/value entries of a product description
//! wsh-cli labels komoda
//!
//! # Product card with a color selected
//! wsh-cli card stolik-kawowy --color Orzech
//!
//! # Product page view for a set of options
//! wsh-cli product stolik-kawowy --option Kolor=Orzech
//!
//! # Rendered description HTML, escaped
//! wsh-cli render stolik-kawowy --escaped
//!
//! # Page view for the Polish storefront
//! wsh-cli --locale pl-PL product komoda
//!
//! # Every product in the listing fixture, as cards
//! wsh-cli list
//! ```
//!
//! Products are read from `STOREFRONT_FIXTURES_DIR` (or `--fixtures`). Output
//! is JSON on stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use woodshop_core::{Language, SelectedOption};
use woodshop_storefront::{AppError, StorefrontConfig, logging};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "wsh-cli")]
#[command(author, version, about = "Woodshop storefront preview tools")]
struct Cli {
    /// Fixture directory (overrides `STOREFRONT_FIXTURES_DIR`)
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Storefront locale such as `pl-PL` (overrides `STOREFRONT_LANGUAGE`;
    /// unknown locales fall back to English)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a product description into its fixed sections
    Sections {
        /// Product handle
        handle: String,

        /// Header language (`EN` or `PL`); defaults to `STOREFRONT_LANGUAGE`
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Extract label/value entries from a product description
    Labels {
        /// Product handle
        handle: String,
    },
    /// Build a product grid card
    Card {
        /// Product handle
        handle: String,

        /// Selected color
        #[arg(short, long)]
        color: Option<String>,

        /// Position of the card in the grid (0-based)
        #[arg(short, long, default_value_t = 0)]
        position: usize,
    },
    /// Build the product page view
    Product {
        /// Product handle
        handle: String,

        /// Selected option as `name=value` (repeatable)
        #[arg(short, long = "option", value_parser = commands::parse_selected_option)]
        options: Vec<SelectedOption>,

        /// Header language (`EN` or `PL`); defaults to `STOREFRONT_LANGUAGE`
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Render the description block as HTML
    Render {
        /// Product handle
        handle: String,

        /// Escape description markup instead of trusting it
        #[arg(long)]
        escaped: bool,

        /// Render the product card instead of the description
        #[arg(long)]
        card: bool,
    },
    /// List products from the listing fixture as cards
    List {
        /// Selected color applied to every card
        #[arg(short, long)]
        color: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.json_logs);

    let result: Result<(), AppError> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(if e.is_not_found() { 2 } else { 1 });
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = StorefrontConfig::from_env()?;
    apply_overrides(&mut config, cli.fixtures, cli.locale.as_deref());
    let ctx = Context::new(config);

    match cli.command {
        Commands::Sections { handle, language } => {
            commands::describe::sections(&ctx, &handle, language).await?;
        }
        Commands::Labels { handle } => commands::describe::labels(&ctx, &handle).await?,
        Commands::Card {
            handle,
            color,
            position,
        } => commands::preview::card(&ctx, &handle, color.as_deref(), position).await?,
        Commands::Product {
            handle,
            options,
            language,
        } => commands::preview::product(&ctx, &handle, &options, language).await?,
        Commands::Render {
            handle,
            escaped,
            card,
        } => commands::render::render(&ctx, &handle, escaped, card).await?,
        Commands::List { color } => commands::preview::list(&ctx, color.as_deref()).await?,
    }
    Ok(())
}

/// Global flags take precedence over the environment.
fn apply_overrides(config: &mut StorefrontConfig, fixtures: Option<PathBuf>, locale: Option<&str>) {
    if let Some(fixtures) = fixtures {
        config.fixtures_dir = fixtures;
    }
    if locale.is_some() {
        config.language = Language::from_locale(locale);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn overridden(args: &[&str]) -> StorefrontConfig {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = StorefrontConfig {
            language: Language::Pl,
            ..StorefrontConfig::default()
        };
        apply_overrides(&mut config, cli.fixtures, cli.locale.as_deref());
        config
    }

    #[test]
    fn test_locale_flag_sets_language() {
        let config = overridden(&["wsh-cli", "--locale", "en-US", "labels", "komoda"]);
        assert_eq!(config.language, Language::En);

        let config = overridden(&["wsh-cli", "labels", "komoda", "--locale", "pl_PL"]);
        assert_eq!(config.language, Language::Pl);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let config = overridden(&["wsh-cli", "--locale", "fr-FR", "list"]);
        assert_eq!(config.language, Language::En);
    }

    #[test]
    fn test_without_flags_environment_config_is_kept() {
        let config = overridden(&["wsh-cli", "list"]);
        assert_eq!(config.language, Language::Pl);
        assert_eq!(config.fixtures_dir, PathBuf::from("fixtures"));

        let config = overridden(&["wsh-cli", "--fixtures", "/tmp/recorded", "list"]);
        assert_eq!(config.fixtures_dir, PathBuf::from("/tmp/recorded"));
    }
}
