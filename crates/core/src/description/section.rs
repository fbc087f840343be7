//! Section keys and the paragraph-variant section map.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed description sections.
///
/// Keys are the storefront's Polish section names regardless of the language
/// the description is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    /// General description (everything before the first header).
    Opis,
    /// Material.
    Material,
    /// Dimensions.
    Wymiary,
    /// Color.
    Kolor,
    /// Personalization options.
    Personalizacja,
    /// Notes and remarks.
    Uwagi,
}

impl SectionKey {
    /// All keys in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Opis,
        Self::Material,
        Self::Wymiary,
        Self::Kolor,
        Self::Personalizacja,
        Self::Uwagi,
    ];

    /// Key name as used in CSS classes and serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opis => "opis",
            Self::Material => "material",
            Self::Wymiary => "wymiary",
            Self::Kolor => "kolor",
            Self::Personalizacja => "personalizacja",
            Self::Uwagi => "uwagi",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description content bucketed by [`SectionKey`].
///
/// Every key is always present; a section with no content holds an empty
/// list. Fragments keep their inline HTML and document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSections {
    /// General description.
    pub opis: Vec<String>,
    /// Material.
    pub material: Vec<String>,
    /// Dimensions.
    pub wymiary: Vec<String>,
    /// Color.
    pub kolor: Vec<String>,
    /// Personalization.
    pub personalizacja: Vec<String>,
    /// Notes.
    pub uwagi: Vec<String>,
}

impl DescriptionSections {
    /// Fragments of one section.
    #[must_use]
    pub fn get(&self, key: SectionKey) -> &[String] {
        match key {
            SectionKey::Opis => &self.opis,
            SectionKey::Material => &self.material,
            SectionKey::Wymiary => &self.wymiary,
            SectionKey::Kolor => &self.kolor,
            SectionKey::Personalizacja => &self.personalizacja,
            SectionKey::Uwagi => &self.uwagi,
        }
    }

    pub(crate) fn push(&mut self, key: SectionKey, fragment: String) {
        let bucket = match key {
            SectionKey::Opis => &mut self.opis,
            SectionKey::Material => &mut self.material,
            SectionKey::Wymiary => &mut self.wymiary,
            SectionKey::Kolor => &mut self.kolor,
            SectionKey::Personalizacja => &mut self.personalizacja,
            SectionKey::Uwagi => &mut self.uwagi,
        };
        bucket.push(fragment);
    }

    /// Whether no section has content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SectionKey::ALL.iter().all(|&key| self.get(key).is_empty())
    }

    /// Sections that have content, in [`SectionKey::ALL`] order.
    pub fn non_empty(&self) -> impl Iterator<Item = (SectionKey, &[String])> {
        SectionKey::ALL
            .into_iter()
            .map(|key| (key, self.get(key)))
            .filter(|(_, fragments)| !fragments.is_empty())
    }

    /// Fragment counts per section, indexed like [`SectionKey::ALL`].
    #[must_use]
    pub fn counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for (slot, key) in counts.iter_mut().zip(SectionKey::ALL) {
            *slot = self.get(key).len();
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let names: Vec<&str> = SectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["opis", "material", "wymiary", "kolor", "personalizacja", "uwagi"]
        );
    }

    #[test]
    fn test_push_and_get() {
        let mut sections = DescriptionSections::default();
        assert!(sections.is_empty());

        sections.push(SectionKey::Uwagi, "Produkt ręcznie robiony".to_string());
        assert!(!sections.is_empty());
        assert_eq!(sections.get(SectionKey::Uwagi), ["Produkt ręcznie robiony"]);
        assert!(sections.get(SectionKey::Opis).is_empty());
    }

    #[test]
    fn test_non_empty_skips_empty_sections() {
        let mut sections = DescriptionSections::default();
        sections.push(SectionKey::Kolor, "Naturalny".to_string());
        sections.push(SectionKey::Opis, "Intro".to_string());

        let keys: Vec<SectionKey> = sections.non_empty().map(|(k, _)| k).collect();
        assert_eq!(keys, [SectionKey::Opis, SectionKey::Kolor]);
        assert_eq!(sections.counts(), [1, 0, 0, 1, 0, 0]);
    }
}
