//! Lookup of composite presets by kind and name

use super::presets::{DASHBOARD, DOCUMENTATION, LANDING_PAGE};
use super::{compose, CompositeOverrides, CompositePreset};
use crate::category::CompositeKind;
use crate::error::PresetError;
use crate::registry::PresetTable;

/// Name every composite kind is guaranteed to define
pub const DEFAULT_PRESET: &str = "default";

/// Resolves dashboard, landing page and documentation presets
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetManager;

impl PresetManager {
    pub fn new() -> Self {
        Self
    }

    /// The table backing `kind`
    pub fn table(&self, kind: CompositeKind) -> &'static PresetTable<CompositePreset> {
        match kind {
            CompositeKind::Dashboard => &*DASHBOARD,
            CompositeKind::LandingPage => &*LANDING_PAGE,
            CompositeKind::Documentation => &*DOCUMENTATION,
        }
    }

    /// Resolve `name` within `kind`, returning an owned copy
    ///
    /// Unknown names fall back to the kind's `default` preset.
    pub fn get(&self, kind: CompositeKind, name: &str) -> CompositePreset {
        let table = self.table(kind);
        match table.get(name) {
            Some(preset) => {
                tracing::debug!(%kind, preset = name, "resolved composite preset");
                preset.clone()
            }
            None => {
                tracing::warn!(%kind, preset = name, "unknown composite preset, using default");
                table
                    .get(DEFAULT_PRESET)
                    .cloned()
                    .unwrap_or_default()
            }
        }
    }

    /// Parse `category` and resolve `name` within it
    ///
    /// Fails when `category` is not a composite category.
    pub fn get_str(&self, category: &str, name: &str) -> Result<CompositePreset, PresetError> {
        let kind: CompositeKind = category.parse()?;
        Ok(self.get(kind, name))
    }

    pub fn dashboard(&self, name: &str) -> CompositePreset {
        self.get(CompositeKind::Dashboard, name)
    }

    pub fn landing_page(&self, name: &str) -> CompositePreset {
        self.get(CompositeKind::LandingPage, name)
    }

    pub fn documentation(&self, name: &str) -> CompositePreset {
        self.get(CompositeKind::Documentation, name)
    }

    /// Preset names of `kind`, in declaration order
    pub fn names(&self, kind: CompositeKind) -> Vec<&'static str> {
        self.table(kind).names().collect()
    }

    /// Merge `overrides` into `base`; see [`compose`]
    pub fn customize(&self, base: &CompositePreset, overrides: &CompositeOverrides) -> CompositePreset {
        compose(base, overrides)
    }

    /// Resolve `name` within `kind` and merge `overrides` into it
    pub fn customize_named(
        &self,
        kind: CompositeKind,
        name: &str,
        overrides: &CompositeOverrides,
    ) -> CompositePreset {
        compose(&self.get(kind, name), overrides)
    }
}
