//! Color option synonyms and swatches.

use serde::Serialize;

use crate::types::ProductOption;
use crate::types::product::eq_ignore_case;

/// Option names that identify the color option, in any case.
pub const COLOR_OPTION_NAMES: [&str; 3] = ["color", "kolor", "colour"];

/// Whether `name` is one of [`COLOR_OPTION_NAMES`], ignoring case.
#[must_use]
pub fn is_color_option_name(name: &str) -> bool {
    COLOR_OPTION_NAMES
        .iter()
        .any(|candidate| eq_ignore_case(candidate, name.trim()))
}

/// First option whose name is a color synonym.
#[must_use]
pub fn find_color_option(options: &[ProductOption]) -> Option<&ProductOption> {
    options.iter().find(|o| is_color_option_name(&o.name))
}

/// One selectable color chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Option value as declared on the product.
    pub value: String,
    /// Value used as a CSS color (lowercased).
    pub css_color: String,
    /// Whether this is the selected color.
    pub active: bool,
}

/// Swatches for the product's color option.
///
/// Empty when the product has no color option. A swatch is active only when
/// its value equals `selected` exactly, matching how the selection was made
/// from the swatch itself.
#[must_use]
pub fn color_swatches(options: &[ProductOption], selected: Option<&str>) -> Vec<Swatch> {
    let Some(option) = find_color_option(options) else {
        return Vec::new();
    };

    option
        .values
        .iter()
        .map(|value| Swatch {
            value: value.clone(),
            css_color: value.to_lowercase(),
            active: selected == Some(value.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names_any_case() {
        for name in ["Color", "COLOR", "kolor", "Colour", "KoLoR"] {
            assert!(is_color_option_name(name), "{name} should be a color option");
        }
        assert!(!is_color_option_name("Rozmiar"));
        assert!(!is_color_option_name("Colors"));
    }

    #[test]
    fn test_every_synonym_finds_the_same_option() {
        for name in ["Color", "COLOR", "kolor", "Colour"] {
            let options = [
                ProductOption::new("Rozmiar", ["S", "M"]),
                ProductOption::new(name, ["Czerwony", "Zielony"]),
            ];
            let found = find_color_option(&options);
            assert_eq!(found.map(|o| o.values.len()), Some(2), "{name}");

            let swatches = color_swatches(&options, None);
            let values: Vec<&str> = swatches.iter().map(|s| s.value.as_str()).collect();
            assert_eq!(values, ["Czerwony", "Zielony"]);
        }
    }

    #[test]
    fn test_first_color_option_wins() {
        let options = [
            ProductOption::new("Kolor", ["Dąb"]),
            ProductOption::new("Color", ["Oak"]),
        ];
        assert_eq!(find_color_option(&options).map(|o| o.name.as_str()), Some("Kolor"));
    }

    #[test]
    fn test_no_color_option_means_no_swatches() {
        let options = [ProductOption::new("Rozmiar", ["S", "M"])];
        assert!(find_color_option(&options).is_none());
        assert!(color_swatches(&options, Some("S")).is_empty());
    }

    #[test]
    fn test_swatch_css_color_and_active() {
        let options = [ProductOption::new("Kolor", ["Red", "NavyBlue"])];
        let swatches = color_swatches(&options, Some("NavyBlue"));

        assert_eq!(
            swatches,
            [
                Swatch {
                    value: "Red".to_string(),
                    css_color: "red".to_string(),
                    active: false,
                },
                Swatch {
                    value: "NavyBlue".to_string(),
                    css_color: "navyblue".to_string(),
                    active: true,
                },
            ]
        );
    }

    #[test]
    fn test_swatch_active_is_exact() {
        let options = [ProductOption::new("Kolor", ["Red"])];
        let swatches = color_swatches(&options, Some("red"));
        assert_eq!(swatches.first().map(|s| s.active), Some(false));
    }
}
