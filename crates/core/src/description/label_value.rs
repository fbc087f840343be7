//! Label/value span description parser.

use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::html;

/// Label under which the general description is stored.
pub const OPIS_LABEL: &str = "Opis";

/// Body of the `product-description` wrapper up to the first nested section div.
static OPIS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div class="product-description">(.*?)(?:<div class=|$)"#)
        .expect("Invalid regex")
});

/// `<span class="label">X:</span> <span class="value">Y</span>`.
static LABEL_VALUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<span class="label">\s*([^<:]+):\s*</span>\s*<span class="value">(.*?)</span>"#,
    )
    .expect("Invalid regex")
});

/// Line break plus any whitespace following it.
static VALUE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>\s*").expect("Invalid regex"));

/// Labeled description entries in document order.
///
/// Keys are whatever labels the markup carries. Inserting an existing label
/// replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelValueSections {
    entries: Vec<(String, String)>,
}

impl LabelValueSections {
    /// Insert or overwrite an entry.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Value stored under `label` (exact, case-sensitive match).
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl Serialize for LabelValueSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Extract `label: value` entries from a description.
///
/// The text of the `product-description` wrapper before any nested section
/// div becomes the [`OPIS_LABEL`] entry. Every label/value span pair then
/// inserts (or overwrites) an entry keyed by its trimmed label. A description
/// without either yields an empty map.
#[must_use]
pub fn parse_label_values(description: &str) -> LabelValueSections {
    let mut sections = LabelValueSections::default();

    if let Some(body) = OPIS_RE.captures(description).and_then(|c| c.get(1)) {
        let opis = html::paragraphs_to_lines(body.as_str());
        if !opis.is_empty() {
            sections.insert(OPIS_LABEL, opis);
        }
    }

    for caps in LABEL_VALUE_RE.captures_iter(description) {
        let (Some(label), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = VALUE_BREAK_RE.replace_all(value.as_str(), "\n");
        sections.insert(label.as_str().trim(), html::collapse_whitespace(&value));
    }

    sections
}
