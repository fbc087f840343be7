//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_LANGUAGE` - Description header language, `EN` or `PL` (default: EN)
//! - `STOREFRONT_DESCRIPTION_HTML` - `trusted` or `escaped` (default: trusted)
//! - `STOREFRONT_EAGER_IMAGES` - Number of leading product cards whose image loads eagerly (default: 6)
//! - `STOREFRONT_FIXTURES_DIR` - Directory holding Storefront API fixtures (default: fixtures)

use std::path::PathBuf;

use thiserror::Error;
use woodshop_core::Language;

use crate::render::HtmlPolicy;

/// Default number of eagerly loaded card images (the first grid rows).
pub const DEFAULT_EAGER_IMAGE_COUNT: usize = 6;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Language used to recognise description section headers
    pub language: Language,
    /// Whether description fragments are emitted as raw HTML
    pub description_html: HtmlPolicy,
    /// Cards at positions below this load their primary image eagerly
    pub eager_image_count: usize,
    /// Root of the fixture directory read by `FixtureSource`
    pub fixtures_dir: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            description_html: HtmlPolicy::default(),
            eager_image_count: DEFAULT_EAGER_IMAGE_COUNT,
            fixtures_dir: PathBuf::from("fixtures"),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let language = env
            .get_or_default("STOREFRONT_LANGUAGE", "EN")
            .parse::<Language>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_LANGUAGE".to_string(), e.to_string()))?;
        let description_html = env
            .get_or_default("STOREFRONT_DESCRIPTION_HTML", "trusted")
            .parse::<HtmlPolicy>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_DESCRIPTION_HTML".to_string(), e)
            })?;
        let eager_image_count = env
            .get_or_default("STOREFRONT_EAGER_IMAGES", "6")
            .parse::<usize>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_EAGER_IMAGES".to_string(), e.to_string())
            })?;
        let fixtures_dir = PathBuf::from(env.get_or_default("STOREFRONT_FIXTURES_DIR", "fixtures"));

        Ok(Self {
            language,
            description_html,
            eager_image_count,
            fixtures_dir,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the blank-means-unset rule applied.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable. Blank values count as unset.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key).unwrap_or_else(|| default.to_string())
    }
}
