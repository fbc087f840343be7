//! Paragraph-header description parser.
//!
//! The parser is a single pass over paragraph fragments with one piece of
//! state: the section currently receiving content. A fragment whose whole
//! plain text is a header moves the cursor and is dropped; anything else is
//! appended, HTML intact, to the current section.

use super::html;
use super::matcher::{HeaderMatcher, LanguageHeaders};
use super::section::{DescriptionSections, SectionKey};
use crate::types::Language;

/// What a single fragment means to the parser.
#[derive(Debug, PartialEq, Eq)]
enum Fragment {
    /// Only markup, no visible text (wrapper tags and the like).
    Blank,
    /// A header opening the given section.
    Header(SectionKey),
    /// Content for the current section.
    Content,
}

/// Parser state: the cursor plus everything collected so far.
struct SectionCursor<'m, M: ?Sized> {
    matcher: &'m M,
    current: SectionKey,
    sections: DescriptionSections,
}

impl<'m, M: HeaderMatcher + ?Sized> SectionCursor<'m, M> {
    fn new(matcher: &'m M) -> Self {
        Self {
            matcher,
            current: SectionKey::Opis,
            sections: DescriptionSections::default(),
        }
    }

    fn classify(&self, fragment: &str) -> Fragment {
        let text = html::plain_text(fragment);
        if text.is_empty() {
            return Fragment::Blank;
        }
        self.matcher
            .match_header(&text)
            .map_or(Fragment::Content, Fragment::Header)
    }

    fn feed(&mut self, fragment: &str) {
        match self.classify(fragment) {
            Fragment::Blank => {}
            Fragment::Header(key) => self.current = key,
            Fragment::Content => self.sections.push(self.current, fragment.to_owned()),
        }
    }

    fn finish(self) -> DescriptionSections {
        self.sections
    }
}

/// Split a description into sections using the headers of `language`.
///
/// Never fails: empty or header-less input puts everything (possibly
/// nothing) under [`SectionKey::Opis`].
#[must_use]
pub fn parse_description(html: &str, language: Language) -> DescriptionSections {
    parse_description_with(html, &LanguageHeaders::new(language))
}

/// Split a description into sections using a custom header matcher.
#[must_use]
pub fn parse_description_with<M: HeaderMatcher + ?Sized>(
    html: &str,
    matcher: &M,
) -> DescriptionSections {
    let normalized = html::normalize_line_breaks(html);
    let mut cursor = SectionCursor::new(matcher);

    for fragment in html::paragraph_fragments(&normalized) {
        cursor.feed(fragment);
    }

    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_has_all_sections_empty() {
        let sections = parse_description("", Language::En);
        assert_eq!(sections, DescriptionSections::default());
        for key in SectionKey::ALL {
            assert!(sections.get(key).is_empty(), "{key} should be empty");
        }
    }

    #[test]
    fn test_polish_material_section() {
        let html = "<div class=\"product-description\"><p>Intro text</p><p>Materiał:</p><p>Drewno dębowe</p></div>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.opis, ["Intro text"]);
        assert_eq!(sections.material, ["Drewno dębowe"]);
        assert!(sections.wymiary.is_empty());
        assert!(sections.kolor.is_empty());
        assert!(sections.personalizacja.is_empty());
        assert!(sections.uwagi.is_empty());
    }

    #[test]
    fn test_embedded_header_does_not_switch_section() {
        let html = "<p>Informacje: Materiał: dąb, styl klasyczny</p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.opis, ["Informacje: Materiał: dąb, styl klasyczny"]);
        assert!(sections.material.is_empty());
    }

    #[test]
    fn test_partial_line_header_stays_in_current_section() {
        let html = "<p>Wymiary:</p><p>40 x 60 cm</p><p>Materiał: dąb</p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.wymiary, ["40 x 60 cm", "Materiał: dąb"]);
        assert!(sections.material.is_empty());
    }

    #[test]
    fn test_no_headers_puts_everything_in_opis() {
        let html = "<p>Pierwszy akapit.</p><p>Drugi akapit.</p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.opis, ["Pierwszy akapit.", "Drugi akapit."]);
        assert_eq!(sections.counts(), [2, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_header_without_content_leaves_section_empty() {
        let html = "<p>Intro</p><p>Color:</p><p>Notes:</p><p>Hand made</p>";
        let sections = parse_description(html, Language::En);

        assert!(sections.kolor.is_empty());
        assert_eq!(sections.uwagi, ["Hand made"]);
    }

    #[test]
    fn test_all_english_sections_in_order() {
        let html = concat!(
            "<p>A sturdy oak table.</p>",
            "<p>Material:</p><p>Solid oak</p>",
            "<p>Dimensions:</p><p>120 x 80 cm</p>",
            "<p>Color:</p><p>Natural</p>",
            "<p>Customization:</p><p>Engraving available</p>",
            "<p>Remarks:</p><p>Made to order</p>",
        );
        let sections = parse_description(html, Language::En);

        assert_eq!(sections.opis, ["A sturdy oak table."]);
        assert_eq!(sections.material, ["Solid oak"]);
        assert_eq!(sections.wymiary, ["120 x 80 cm"]);
        assert_eq!(sections.kolor, ["Natural"]);
        assert_eq!(sections.personalizacja, ["Engraving available"]);
        assert_eq!(sections.uwagi, ["Made to order"]);
    }

    #[test]
    fn test_header_wrapped_in_inline_markup() {
        let html = "<p><strong>Kolor:</strong>&nbsp;</p><p>Naturalny <em>olej</em></p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.kolor, ["Naturalny <em>olej</em>"]);
    }

    #[test]
    fn test_line_breaks_become_newlines() {
        let html = "<p>Wymiary:</p><p>Szerokość 40 cm<br>Wysokość 60 cm<br/></p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.wymiary, ["Szerokość 40 cm\nWysokość 60 cm"]);
    }

    #[test]
    fn test_nbsp_only_paragraphs_are_dropped() {
        let html = "<p>Intro</p><p>&nbsp;</p><p> &nbsp; </p><p>Outro</p>";
        let sections = parse_description(html, Language::En);

        assert_eq!(sections.opis, ["Intro", "Outro"]);
    }

    #[test]
    fn test_unrecognised_header_is_content() {
        let html = "<p>Materiał:</p><p>Dąb</p><p>Pielęgnacja:</p><p>Olej raz w roku</p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(
            sections.material,
            ["Dąb", "Pielęgnacja:", "Olej raz w roku"]
        );
    }

    #[test]
    fn test_text_outside_paragraphs_is_kept() {
        let html = "Luźny tekst<p>Akapit</p>";
        let sections = parse_description(html, Language::Pl);

        assert_eq!(sections.opis, ["Luźny tekst", "Akapit"]);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let html = "<p>Intro</p><p>Uwagi:</p><p>Uwaga <b>1</b></p>";
        let first = parse_description(html, Language::Pl);
        let second = parse_description(html, Language::Pl);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).ok(),
            serde_json::to_string(&second).ok()
        );
    }

    #[test]
    fn test_custom_matcher() {
        struct CareHeaders;

        impl HeaderMatcher for CareHeaders {
            fn match_header(&self, text: &str) -> Option<SectionKey> {
                (text == "Care:").then_some(SectionKey::Uwagi)
            }
        }

        let html = "<p>Intro</p><p>Care:</p><p>Oil yearly</p>";
        let sections = parse_description_with(html, &CareHeaders);

        assert_eq!(sections.opis, ["Intro"]);
        assert_eq!(sections.uwagi, ["Oil yearly"]);
    }
}
