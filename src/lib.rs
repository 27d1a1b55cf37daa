//! Preset Forge - named visual presets for web front ends
//!
//! This library holds static tables of design tokens (position, layout,
//! color and typography presets, plus composite dashboard, landing page and
//! documentation presets) and the operations around them: resolve by name,
//! merge overrides, and stamp a preset onto an element as CSS custom
//! properties and classes.
//!
//! # Example
//!
//! ```rust
//! use preset_forge::{PresetForge, StyledElement};
//!
//! let forge = PresetForge::new();
//!
//! let dock = forge.presets().position.forge("dock-menu");
//! assert_eq!(dock.get_str("zIndex"), Some("50"));
//!
//! let mut body = StyledElement::new();
//! forge.apply_preset(&mut body, "dashboard", "default").unwrap();
//! assert_eq!(body.property("--sidebar-width"), Some("280px"));
//! assert!(body.has_class("card-marketing"));
//! ```

pub mod apply;
pub mod atomic;
pub mod category;
pub mod composite;
pub mod error;
pub mod logging;
pub mod motion;
pub mod page;
pub mod registry;
pub mod value;

pub use apply::{apply_preset, project_preset, ApplyConfig, Stylable, StyledElement};
pub use atomic::{
    Color, ForgeInput, Layout, Position, PositionInput, Presets, StyleInput, Typography,
};
pub use category::{CompositeKind, PresetCategory};
pub use composite::{
    compose, CompositeOverrides, CompositePreset, OverridesError, PresetManager, DEFAULT_PRESET,
};
pub use error::PresetError;
pub use motion::{card_animation, page_animation, MotionConfig};
pub use page::{resolve_page, PageConfig, PageKind, PageRenderer, ResolvedPage};
pub use registry::PresetTable;
pub use value::{StyleMap, StyleValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point bundling the atomic presets and the composite manager
///
/// Methods taking category or page strings validate them and fail with
/// [`PresetError`]; preset names are never validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetForge {
    presets: Presets,
    manager: PresetManager,
}

impl PresetForge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The position, layout, color and typography entities
    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    pub fn manager(&self) -> &PresetManager {
        &self.manager
    }

    /// Resolve `input` within an atomic category named by string
    ///
    /// # Example
    ///
    /// ```rust
    /// use preset_forge::PresetForge;
    ///
    /// let forge = PresetForge::new();
    /// let raw = forge.resolve("position", "sticky").unwrap();
    /// assert_eq!(raw.get_str("position"), Some("sticky"));
    /// assert!(forge.resolve("widgets", "sticky").is_err());
    /// ```
    pub fn resolve(
        &self,
        category: &str,
        input: impl Into<ForgeInput>,
    ) -> Result<StyleMap, PresetError> {
        self.presets.resolve_str(category, input)
    }

    /// Resolve a composite preset by category string and name
    pub fn preset(&self, category: &str, name: &str) -> Result<CompositePreset, PresetError> {
        self.manager.get_str(category, name)
    }

    /// Merge `overrides` into `base`; see [`compose`]
    pub fn customize_preset(
        &self,
        base: &CompositePreset,
        overrides: &CompositeOverrides,
    ) -> CompositePreset {
        compose(base, overrides)
    }

    /// Resolve a composite preset and project it onto `element`
    ///
    /// Fails before touching `element` when `category` is not a composite
    /// category.
    pub fn apply_preset<E: Stylable + ?Sized>(
        &self,
        element: &mut E,
        category: &str,
        name: &str,
    ) -> Result<CompositePreset, PresetError> {
        let kind: CompositeKind = category.parse()?;
        Ok(apply_preset(element, kind, name))
    }

    /// Resolve a page descriptor by page type string
    pub fn page(&self, page: &str) -> Result<ResolvedPage, PresetError> {
        page::resolve_page_str(page)
    }

    /// Resolve a page and hand it to `renderer`
    pub fn generate_page<R: PageRenderer + ?Sized>(
        &self,
        page: &str,
        renderer: &R,
    ) -> Result<String, PresetError> {
        let resolved = self.page(page)?;
        Ok(renderer.render(&resolved))
    }
}
