//! Section header vocabularies.

use std::sync::LazyLock;

use regex::Regex;

use super::section::SectionKey;
use crate::types::Language;

/// Recognises section headers in a paragraph's plain text.
///
/// Implementations decide whether the *entire* plain text of a paragraph is a
/// header. A header embedded in running text must not match.
pub trait HeaderMatcher {
    /// The section the header opens, or `None` for ordinary content.
    fn match_header(&self, text: &str) -> Option<SectionKey>;
}

/// Header patterns for one language, anchored to the whole paragraph text.
type Vocabulary = Vec<(SectionKey, Regex)>;

fn vocabulary(entries: &[(SectionKey, &str)]) -> Vocabulary {
    entries
        .iter()
        .map(|&(key, labels)| {
            let pattern = format!(r"(?i)^(?:{labels}):\s*$");
            (key, Regex::new(&pattern).expect("Invalid regex"))
        })
        .collect()
}

static POLISH: LazyLock<Vocabulary> = LazyLock::new(|| {
    vocabulary(&[
        (SectionKey::Material, "Materiał"),
        (SectionKey::Wymiary, "Wymiary"),
        (SectionKey::Kolor, "Kolor"),
        (SectionKey::Personalizacja, "Personalizacja"),
        (SectionKey::Uwagi, "Uwagi"),
    ])
});

static ENGLISH: LazyLock<Vocabulary> = LazyLock::new(|| {
    vocabulary(&[
        (SectionKey::Material, "Material"),
        (SectionKey::Wymiary, "Dimensions"),
        (SectionKey::Kolor, "Color"),
        (SectionKey::Personalizacja, "Personalization|Customization"),
        (SectionKey::Uwagi, "Notes|Remarks"),
    ])
});

/// The built-in header vocabulary of a [`Language`].
#[derive(Debug, Clone, Copy)]
pub struct LanguageHeaders {
    vocabulary: &'static LazyLock<Vocabulary>,
}

impl LanguageHeaders {
    /// Headers for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let vocabulary = match language {
            Language::Pl => &POLISH,
            Language::En => &ENGLISH,
        };
        Self { vocabulary }
    }
}

impl HeaderMatcher for LanguageHeaders {
    fn match_header(&self, text: &str) -> Option<SectionKey> {
        self.vocabulary
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(key, _)| *key)
    }
}

impl From<Language> for LanguageHeaders {
    fn from(language: Language) -> Self {
        Self::new(language)
    }
}
