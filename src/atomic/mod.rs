//! Atomic presets: position, layout, color and typography
//!
//! Each category is a small entity holding its named table and a `forge`
//! operation that resolves a name (or an ad hoc description) to a fresh
//! [`StyleMap`]. [`Presets`] groups the four entities together.
//!
//! # Example
//!
//! ```rust
//! use preset_forge::Presets;
//!
//! let presets = Presets::new();
//! let dock = presets.position.forge("dock-menu");
//! assert_eq!(dock.get_str("position"), Some("absolute"));
//!
//! let custom = presets.position.forge(["absolute", "bottom"]);
//! assert_eq!(custom.get_str("bottom"), Some("0"));
//! ```

mod color;
mod layout;
mod position;
mod typography;

pub use color::Color;
pub use layout::Layout;
pub use position::{Position, PositionInput};
pub use typography::Typography;

use crate::category::PresetCategory;
use crate::error::PresetError;
use crate::registry::PresetTable;
use crate::value::StyleMap;

/// Input accepted by the layout, color and typography entities
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    /// Look up a named preset; unknown names resolve to an empty map
    Name(String),
    /// Ad hoc styling, passed through as a copy
    Custom(StyleMap),
}

impl From<&str> for StyleInput {
    fn from(name: &str) -> Self {
        StyleInput::Name(name.to_string())
    }
}

impl From<String> for StyleInput {
    fn from(name: String) -> Self {
        StyleInput::Name(name)
    }
}

impl From<StyleMap> for StyleInput {
    fn from(map: StyleMap) -> Self {
        StyleInput::Custom(map)
    }
}

impl From<&StyleMap> for StyleInput {
    fn from(map: &StyleMap) -> Self {
        StyleInput::Custom(map.clone())
    }
}

/// Category-agnostic input for [`Presets::resolve`]
#[derive(Debug, Clone, PartialEq)]
pub enum ForgeInput {
    Name(String),
    Tokens(Vec<String>),
    Custom(StyleMap),
}

impl From<&str> for ForgeInput {
    fn from(name: &str) -> Self {
        ForgeInput::Name(name.to_string())
    }
}

impl From<StyleMap> for ForgeInput {
    fn from(map: StyleMap) -> Self {
        ForgeInput::Custom(map)
    }
}

impl From<Vec<String>> for ForgeInput {
    fn from(tokens: Vec<String>) -> Self {
        ForgeInput::Tokens(tokens)
    }
}

/// Resolve a [`StyleInput`] against a table with the lenient fallback shared
/// by layout, color and typography.
fn forge_style(table: &PresetTable, category: PresetCategory, input: StyleInput) -> StyleMap {
    match input {
        StyleInput::Name(name) => match table.get(&name) {
            Some(preset) => {
                tracing::debug!(%category, preset = %name, "resolved named preset");
                preset.clone()
            }
            None => {
                tracing::debug!(%category, preset = %name, "unknown preset name, no styling");
                StyleMap::new()
            }
        },
        StyleInput::Custom(map) => map,
    }
}

/// The four atomic preset entities under one roof
#[derive(Debug, Clone, Copy, Default)]
pub struct Presets {
    pub position: Position,
    pub layout: Layout,
    pub color: Color,
    pub typography: Typography,
}

impl Presets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `input` within an atomic `category`
    ///
    /// Fails only when `category` holds composite presets. Input shapes a
    /// category does not accept degrade like an unknown name would: token
    /// lists give an empty map outside position, and a map given to position
    /// yields `{ position: "relative" }`.
    pub fn resolve(
        &self,
        category: PresetCategory,
        input: impl Into<ForgeInput>,
    ) -> Result<StyleMap, PresetError> {
        let input = input.into();
        let resolved = match category {
            PresetCategory::Position => match input {
                ForgeInput::Name(name) => self.position.forge(name),
                ForgeInput::Tokens(tokens) => self.position.forge(tokens),
                ForgeInput::Custom(_) => position::relative(),
            },
            PresetCategory::Layout => self.layout.forge_input(input),
            PresetCategory::Color => self.color.forge_input(input),
            PresetCategory::Typography => self.typography.forge_input(input),
            PresetCategory::Dashboard
            | PresetCategory::LandingPage
            | PresetCategory::Documentation => {
                return Err(PresetError::unsupported_category(category.as_str()));
            }
        };
        Ok(resolved)
    }

    /// Parse `category` and resolve `input` within it
    pub fn resolve_str(
        &self,
        category: &str,
        input: impl Into<ForgeInput>,
    ) -> Result<StyleMap, PresetError> {
        self.resolve(category.parse()?, input)
    }

    /// Preset names of an atomic category, in declaration order
    pub fn names(&self, category: PresetCategory) -> Result<Vec<&'static str>, PresetError> {
        let table = match category {
            PresetCategory::Position => self.position.presets(),
            PresetCategory::Layout => self.layout.presets(),
            PresetCategory::Color => self.color.presets(),
            PresetCategory::Typography => self.typography.presets(),
            _ => return Err(PresetError::unsupported_category(category.as_str())),
        };
        Ok(table.names().collect())
    }
}

/// Adapt a category-agnostic input for the map-based entities
fn style_input(input: ForgeInput) -> StyleInput {
    match input {
        ForgeInput::Name(name) => StyleInput::Name(name),
        ForgeInput::Custom(map) => StyleInput::Custom(map),
        ForgeInput::Tokens(_) => StyleInput::Custom(StyleMap::new()),
    }
}
