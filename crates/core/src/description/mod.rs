//! Product description parsing.
//!
//! Product descriptions arrive as rich text (a small HTML subset) and are
//! written against one of two markup conventions:
//!
//! - **Paragraph headers**: a paragraph consisting only of a label such as
//!   `<p>Materiał:</p>` starts a new section; following paragraphs belong to
//!   it. Parsed by [`parse_description`] into a fixed set of [`SectionKey`]s.
//! - **Label/value spans**: `<span class="label">Kolor:</span>
//!   <span class="value">Dąb</span>` pairs anywhere in the markup. Parsed by
//!   [`parse_label_values`] into arbitrary label keys.
//!
//! The two key universes are deliberately separate types. Neither parser
//! fails: malformed or empty markup degrades to empty sections.
//!
//! # Example
//!
//! ```
//! use woodshop_core::{Language, SectionKey, parse_description};
//!
//! let html = "<p>Stolik kawowy.</p><p>Materiał:</p><p>Drewno dębowe</p>";
//! let sections = parse_description(html, Language::Pl);
//!
//! assert_eq!(sections.get(SectionKey::Opis), ["Stolik kawowy."]);
//! assert_eq!(sections.get(SectionKey::Material), ["Drewno dębowe"]);
//! ```

mod html;
mod label_value;
mod matcher;
mod paragraph;
mod section;

pub use label_value::{LabelValueSections, OPIS_LABEL, parse_label_values};
pub use matcher::{HeaderMatcher, LanguageHeaders};
pub use paragraph::{parse_description, parse_description_with};
pub use section::{DescriptionSections, SectionKey};
