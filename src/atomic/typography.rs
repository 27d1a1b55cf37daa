//! Typography presets

use std::sync::LazyLock;

use super::{forge_style, style_input, ForgeInput, StyleInput};
use crate::category::PresetCategory;
use crate::registry::PresetTable;
use crate::style_map;
use crate::value::StyleMap;

static PRESETS: LazyLock<PresetTable> = LazyLock::new(|| {
    PresetTable::from_entries([
        (
            "hero-title",
            style_map! {
                "fontFamily" => "var(--font-secondary, monospace)",
                "fontSize" => "4.5rem",
                "fontWeight" => 900,
                "lineHeight" => 1.1,
                "letterSpacing" => "-0.025em",
            },
        ),
        (
            "section-title",
            style_map! {
                "fontFamily" => "var(--font-secondary, monospace)",
                "fontSize" => "3.5rem",
                "fontWeight" => 900,
                "lineHeight" => 1.1,
            },
        ),
        (
            "card-title",
            style_map! {
                "fontFamily" => "var(--font-secondary, monospace)",
                "fontSize" => "1.5rem",
                "fontWeight" => 700,
            },
        ),
        (
            "body-text",
            style_map! {
                "fontFamily" => "var(--font-primary, sans-serif)",
                "fontSize" => "1rem",
                "lineHeight" => 1.6,
            },
        ),
        (
            "caption",
            style_map! {
                "fontSize" => "0.875rem",
                "color" => "var(--text-muted, #94a3b8)",
                "textTransform" => "uppercase",
                "letterSpacing" => "0.05em",
            },
        ),
    ])
});

/// Typography entity: font stacks, sizes and weights
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    presets: &'static PresetTable,
}

impl Default for Typography {
    fn default() -> Self {
        Self { presets: &PRESETS }
    }
}

impl Typography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presets(&self) -> &'static PresetTable {
        self.presets
    }

    pub fn forge(&self, input: impl Into<StyleInput>) -> StyleMap {
        forge_style(self.presets, PresetCategory::Typography, input.into())
    }

    pub(super) fn forge_input(&self, input: ForgeInput) -> StyleMap {
        self.forge(style_input(input))
    }
}
