//! Loading composite overrides from TOML
//!
//! An override file holds any of the `[layout]`, `[theme]` and
//! `[components]` tables; other top-level keys become extra fields.
//!
//! ```toml
//! variant = "wide"
//!
//! [layout.sidebar]
//! width = "320px"
//!
//! [components]
//! button = "btn-ghost"
//! ```

use std::path::Path;

use thiserror::Error;

use super::CompositeOverrides;

/// Errors that can occur when loading an override file
#[derive(Error, Debug)]
pub enum OverridesError {
    #[error("Failed to read overrides file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse overrides TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl CompositeOverrides {
    /// Load overrides from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OverridesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load overrides from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, OverridesError> {
        let overrides: CompositeOverrides = toml::from_str(content)?;
        tracing::debug!(
            layout = overrides.layout.is_some(),
            theme = overrides.theme.is_some(),
            components = overrides.components.is_some(),
            extra = overrides.extra.len(),
            "loaded composite overrides"
        );
        Ok(overrides)
    }

    /// Serialize overrides back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
