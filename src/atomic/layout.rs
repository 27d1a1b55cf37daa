//! Layout presets

use std::sync::LazyLock;

use super::{forge_style, style_input, ForgeInput, StyleInput};
use crate::category::PresetCategory;
use crate::registry::PresetTable;
use crate::style_map;
use crate::value::StyleMap;

static PRESETS: LazyLock<PresetTable> = LazyLock::new(|| {
    PresetTable::from_entries([
        (
            "container-center",
            style_map! {
                "maxWidth" => "72rem",
                "margin" => "0 auto",
                "padding" => "0 20px",
            },
        ),
        (
            "flex-center",
            style_map! {
                "display" => "flex",
                "justifyContent" => "center",
                "alignItems" => "center",
            },
        ),
        (
            "flex-column",
            style_map! {
                "display" => "flex",
                "flexDirection" => "column",
                "gap" => "16px",
            },
        ),
        (
            "grid-cards",
            style_map! {
                "display" => "grid",
                "gridTemplateColumns" => "repeat(auto-fit, minmax(300px, 1fr))",
                "gap" => "24px",
            },
        ),
        (
            "grid-sidebar",
            style_map! {
                "display" => "grid",
                "gridTemplateColumns" => "320px 1fr",
                "gap" => "24px",
            },
        ),
        (
            "full-screen",
            style_map! {
                "width" => "100vw",
                "height" => "100vh",
            },
        ),
    ])
});

/// Layout entity: flex/grid arrangements and containers
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    presets: &'static PresetTable,
}

impl Default for Layout {
    fn default() -> Self {
        Self { presets: &PRESETS }
    }
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presets(&self) -> &'static PresetTable {
        self.presets
    }

    /// Resolve a preset name (unknown names give an empty map) or pass an
    /// ad hoc map through
    pub fn forge(&self, input: impl Into<StyleInput>) -> StyleMap {
        forge_style(self.presets, PresetCategory::Layout, input.into())
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
    fn test_named_preset() {
        let grid = Layout::new().forge("grid-cards");
        assert_eq!(grid.get_str("display"), Some("grid"));
        assert_eq!(
            grid.get_str("gridTemplateColumns"),
            Some("repeat(auto-fit, minmax(300px, 1fr))")
        );
    }

    #[test]
    fn test_table_verbatim() {
        let layout = Layout::new();
        assert_eq!(
            layout.forge("container-center"),
            style_map! { "maxWidth" => "72rem", "margin" => "0 auto", "padding" => "0 20px" }
        );
        assert_eq!(
            layout.forge("flex-center"),
            style_map! { "display" => "flex", "justifyContent" => "center", "alignItems" => "center" }
        );
        assert_eq!(
            layout.forge("flex-column"),
            style_map! { "display" => "flex", "flexDirection" => "column", "gap" => "16px" }
        );
        assert_eq!(
            layout.forge("grid-cards"),
            style_map! {
                "display" => "grid",
                "gridTemplateColumns" => "repeat(auto-fit, minmax(300px, 1fr))",
                "gap" => "24px",
            }
        );
        assert_eq!(
            layout.forge("grid-sidebar"),
            style_map! { "display" => "grid", "gridTemplateColumns" => "320px 1fr", "gap" => "24px" }
        );
        assert_eq!(
            layout.forge("full-screen"),
            style_map! { "width" => "100vw", "height" => "100vh" }
        );
        assert_eq!(layout.presets().len(), 6);
    }

    #[test]
    fn test_unknown_name_is_empty() {
        assert!(Layout::new().forge("masonry").is_empty());
    }

    #[test]
    fn test_custom_map_passes_through() {
        let custom = style_map! { "display" => "inline-flex", "gap" => "4px" };
        assert_eq!(Layout::new().forge(&custom), custom);
    }
}
