//! Composite presets: whole-page design token sets
//!
//! A composite preset has exactly three groups: `layout` (regions such as
//! `header` or `sidebar`), `theme` (`colors`, `typography`, `spacing`) and
//! `components` (logical role to CSS class name). Dashboard, landing page and
//! documentation presets all share that shape, so one merge works for all.
//!
//! # Merge depth
//!
//! [`compose`] merges each group **one level deep**. An override of
//! `layout.sidebar` replaces the whole `sidebar` map: sub-fields the
//! override leaves out are dropped, not inherited.
//!
//! ```rust
//! use preset_forge::{compose, style_map, CompositeOverrides, PresetManager};
//!
//! let base = PresetManager::new().dashboard("default");
//! let overrides = CompositeOverrides::new()
//!     .with_layout(style_map! { "sidebar" => style_map! { "width" => "300px" } });
//!
//! let custom = compose(&base, &overrides);
//! assert_eq!(custom.layout.get_map("sidebar"), Some(&style_map! { "width" => "300px" }));
//! ```

mod manager;
mod overrides;
mod presets;

pub use manager::{PresetManager, DEFAULT_PRESET};
pub use overrides::OverridesError;

use serde::{Deserialize, Serialize};

use crate::value::{StyleMap, StyleValue};

/// Names of the three fixed groups
pub const GROUPS: [&str; 3] = ["layout", "theme", "components"];

/// A full design token set with the fixed three-group shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositePreset {
    #[serde(default)]
    pub layout: StyleMap,
    #[serde(default)]
    pub theme: StyleMap,
    #[serde(default)]
    pub components: StyleMap,
    /// Top-level fields outside the three groups
    #[serde(flatten)]
    pub extra: StyleMap,
}

impl CompositePreset {
    pub fn new(layout: StyleMap, theme: StyleMap, components: StyleMap) -> Self {
        Self {
            layout,
            theme,
            components,
            extra: StyleMap::new(),
        }
    }

    pub fn colors(&self) -> Option<&StyleMap> {
        self.theme.get_map("colors")
    }

    pub fn typography(&self) -> Option<&StyleMap> {
        self.theme.get_map("typography")
    }

    pub fn spacing(&self) -> Option<&StyleMap> {
        self.theme.get_map("spacing")
    }

    /// Class names from the `components` group, in declaration order
    pub fn class_names(&self) -> impl Iterator<Item = String> + '_ {
        self.components.values().map(StyleValue::to_string)
    }

    /// Method form of [`compose`]
    pub fn customize(&self, overrides: &CompositeOverrides) -> CompositePreset {
        compose(self, overrides)
    }
}

/// A partial composite preset: any group may be left out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<StyleMap>,
    #[serde(flatten)]
    pub extra: StyleMap,
}

impl CompositeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: StyleMap) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_theme(mut self, theme: StyleMap) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_components(mut self, components: StyleMap) -> Self {
        self.components = Some(components);
        self
    }

    /// Set a top-level field outside the three groups
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_none()
            && self.theme.is_none()
            && self.components.is_none()
            && self.extra.is_empty()
    }
}

/// Merge `overrides` into a copy of `base`
///
/// Top-level extra fields are replaced. Each group is merged one level deep:
/// a key present in the override group replaces the base entry wholesale.
/// Neither input is modified and nothing is validated. Extra fields named
/// after a group are ignored, the group merge always wins.
pub fn compose(base: &CompositePreset, overrides: &CompositeOverrides) -> CompositePreset {
    let mut extra = base.extra.clone();
    for (key, value) in overrides.extra.iter() {
        if GROUPS.contains(&key) {
            tracing::warn!(field = key, "ignoring top-level override named after a group");
            continue;
        }
        extra.insert(key, value.clone());
    }

    CompositePreset {
        layout: merge_group(&base.layout, overrides.layout.as_ref()),
        theme: merge_group(&base.theme, overrides.theme.as_ref()),
        components: merge_group(&base.components, overrides.components.as_ref()),
        extra,
    }
}

fn merge_group(base: &StyleMap, overrides: Option<&StyleMap>) -> StyleMap {
    match overrides {
        Some(overrides) => base.merged(overrides),
        None => base.clone(),
    }
}
