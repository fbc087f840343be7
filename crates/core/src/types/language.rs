//! Storefront language.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Language`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The input string is empty.
    #[error("language cannot be empty")]
    Empty,
    /// The language is not one the storefront is written in.
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

/// A language the storefront content is written in.
///
/// Determines which header vocabulary is used when splitting product
/// descriptions into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Polish.
    Pl,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 2] = [Self::En, Self::Pl];

    /// The Storefront API `LanguageCode` for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pl => "PL",
        }
    }

    /// Resolve the language from a locale path segment such as `pl-PL` or `en-us`.
    ///
    /// Missing or unknown locales resolve to the default language.
    #[must_use]
    pub fn from_locale(locale: Option<&str>) -> Self {
        locale
            .and_then(|l| l.split(['-', '_']).next())
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(LanguageError::Empty);
        }
        match tag.to_ascii_uppercase().as_str() {
            "EN" => Ok(Self::En),
            "PL" => Ok(Self::Pl),
            _ => Err(LanguageError::Unsupported(tag.to_owned())),
        }
    }
}
