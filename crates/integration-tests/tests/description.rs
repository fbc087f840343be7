//! Description parsing over recorded product payloads.

#![allow(clippy::unwrap_used)]

use woodshop_core::{Language, SectionKey, parse_description, parse_label_values};
use woodshop_integration_tests::fixture_source;
use woodshop_storefront::ProductSource;

#[tokio::test]
async fn test_polish_paragraph_headers() {
    let product = fixture_source()
        .product_by_handle("stolik-kawowy")
        .await
        .unwrap();
    let sections = parse_description(&product.description_html, Language::Pl);

    assert_eq!(
        sections.get(SectionKey::Opis),
        [
            "Stolik kawowy z litego drewna dębowego.",
            "Informacje: Materiał: dąb, styl klasyczny",
        ]
    );
    assert_eq!(
        sections.get(SectionKey::Material),
        ["Drewno dębowe\nOlej twardy"]
    );
    assert_eq!(
        sections.get(SectionKey::Wymiary),
        ["Szerokość 80 cm\nGłębokość 50 cm"]
    );
    assert_eq!(sections.get(SectionKey::Kolor), ["Naturalny lub orzech"]);
    assert_eq!(sections.get(SectionKey::Personalizacja), ["Grawer na blacie"]);
    assert_eq!(
        sections.get(SectionKey::Uwagi),
        ["Każdy egzemplarz jest <em>unikalny</em>."]
    );
}

#[tokio::test]
async fn test_wrong_language_keeps_everything_in_opis() {
    let product = fixture_source()
        .product_by_handle("stolik-kawowy")
        .await
        .unwrap();
    let sections = parse_description(&product.description_html, Language::En);

    assert_eq!(sections.counts(), [12, 0, 0, 0, 0, 0]);
    assert!(
        sections
            .get(SectionKey::Opis)
            .contains(&"<strong>Materiał:</strong>".to_string())
    );
}

#[tokio::test]
async fn test_english_paragraph_headers() {
    let product = fixture_source().product_by_handle("deska").await.unwrap();
    let sections = parse_description(&product.description_html, Language::En);

    assert_eq!(sections.get(SectionKey::Opis), ["Hand made cutting board."]);
    assert_eq!(
        sections.get(SectionKey::Material),
        ["Beech <strong>end grain</strong>"]
    );
    assert_eq!(sections.get(SectionKey::Wymiary), ["40 x 25 x 4 cm"]);
    assert!(sections.get(SectionKey::Kolor).is_empty());
    assert_eq!(sections.get(SectionKey::Personalizacja), ["Laser engraving"]);
    assert_eq!(
        sections.get(SectionKey::Uwagi),
        ["Oil once a month<script>alert('x')</script>"]
    );
}

#[tokio::test]
async fn test_label_value_markup() {
    let product = fixture_source().product_by_handle("komoda").await.unwrap();
    let sections = parse_label_values(&product.description_html);

    let labels: Vec<&str> = sections.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["Opis", "Materiał", "Wymiary", "Kolor"]);

    assert_eq!(
        sections.get("Opis"),
        Some("Pojemna komoda z czterema szufladami.\nRęcznie wykończona.")
    );
    assert_eq!(sections.get("Materiał"), Some("Orzech amerykański"));
    assert_eq!(sections.get("Wymiary"), Some("120 x 45 x 80 cm"));
    // Second Kolor pair wins
    assert_eq!(sections.get("Kolor"), Some("Orzech"));
}

#[tokio::test]
async fn test_label_value_serializes_in_document_order() {
    let product = fixture_source().product_by_handle("komoda").await.unwrap();
    let json = serde_json::to_string(&parse_label_values(&product.description_html)).unwrap();

    let material = json.find("Materiał").unwrap();
    let kolor = json.find("Kolor").unwrap();
    assert!(json.starts_with("{\"Opis\":"));
    assert!(material < kolor);
}

#[tokio::test]
async fn test_paragraph_parser_ignores_label_value_markup() {
    let product = fixture_source().product_by_handle("komoda").await.unwrap();
    let sections = parse_description(&product.description_html, Language::Pl);

    // Span pairs are whole paragraphs of content, never headers
    assert!(sections.get(SectionKey::Material).is_empty());
    assert!(sections.get(SectionKey::Kolor).is_empty());
    assert_eq!(sections.get(SectionKey::Opis).len(), 6);
}

#[tokio::test]
async fn test_parsing_recorded_payloads_is_idempotent() {
    let source = fixture_source();
    for handle in ["stolik-kawowy", "komoda", "deska"] {
        let product = source.product_by_handle(handle).await.unwrap();
        for language in Language::ALL {
            assert_eq!(
                parse_description(&product.description_html, language),
                parse_description(&product.description_html, language),
                "{handle} / {language}"
            );
        }
        assert_eq!(
            parse_label_values(&product.description_html),
            parse_label_values(&product.description_html)
        );
    }
}
