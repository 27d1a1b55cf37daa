//! Color presets

use std::sync::LazyLock;

use super::{forge_style, style_input, ForgeInput, StyleInput};
use crate::category::PresetCategory;
use crate::registry::PresetTable;
use crate::style_map;
use crate::value::StyleMap;

static PRESETS: LazyLock<PresetTable> = LazyLock::new(|| {
    PresetTable::from_entries([
        (
            "primary-bg",
            style_map! {
                "background" => "var(--background-primary, #000000)",
                "color" => "var(--text-primary, #ffffff)",
            },
        ),
        (
            "secondary-bg",
            style_map! {
                "background" => "var(--background-secondary, #0f172a)",
                "color" => "var(--text-primary, #ffffff)",
            },
        ),
        (
            "accent-border",
            style_map! {
                "border" => "1px solid var(--primary-color, #10b981)",
                "background" => "var(--background-secondary, #0f172a)",
            },
        ),
        (
            "gradient-primary",
            style_map! {
                "background" => "linear-gradient(135deg, var(--primary-color, #10b981), var(--color-primary-dark, #059669))",
            },
        ),
        (
            "card-default",
            style_map! {
                "background" => "linear-gradient(135deg, var(--background-secondary, #1e293b), var(--secondary-color, #334155))",
                "border" => "1px solid var(--border-primary, #334155)",
                "boxShadow" => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            },
        ),
    ])
});

/// Color entity: backgrounds, borders and text colors
#[derive(Debug, Clone, Copy)]
pub struct Color {
    presets: &'static PresetTable,
}

impl Default for Color {
    fn default() -> Self {
        Self { presets: &PRESETS }
    }
}

impl Color {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presets(&self) -> &'static PresetTable {
        self.presets
    }

    pub fn forge(&self, input: impl Into<StyleInput>) -> StyleMap {
        forge_style(self.presets, PresetCategory::Color, input.into())
    }

    pub(super) fn forge_input(&self, input: ForgeInput) -> StyleMap {
        self.forge(style_input(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_verbatim() {
        let color = Color::new();
        assert_eq!(
            color.forge("primary-bg"),
            style_map! {
                "background" => "var(--background-primary, #000000)",
                "color" => "var(--text-primary, #ffffff)",
            }
        );
        assert_eq!(
            color.forge("secondary-bg"),
            style_map! {
                "background" => "var(--background-secondary, #0f172a)",
                "color" => "var(--text-primary, #ffffff)",
            }
        );
        assert_eq!(
            color.forge("accent-border"),
            style_map! {
                "border" => "1px solid var(--primary-color, #10b981)",
                "background" => "var(--background-secondary, #0f172a)",
            }
        );
        assert_eq!(
            color.forge("gradient-primary"),
            style_map! {
                "background" => "linear-gradient(135deg, var(--primary-color, #10b981), var(--color-primary-dark, #059669))",
            }
        );
        assert_eq!(
            color.forge("card-default"),
            style_map! {
                "background" => "linear-gradient(135deg, var(--background-secondary, #1e293b), var(--secondary-color, #334155))",
                "border" => "1px solid var(--border-primary, #334155)",
                "boxShadow" => "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
            }
        );
        assert_eq!(color.presets().len(), 5);
    }

    #[test]
    fn test_card_default() {
        let card = Color::new().forge("card-default");
        assert_eq!(card.get_str("boxShadow"), Some("0 4px 6px -1px rgba(0, 0, 0, 0.1)"));
        assert_eq!(card.len(), 3);
    }

    #[test]
    fn test_unknown_name_is_empty() {
        assert!(Color::new().forge("neon").is_empty());
    }
}
