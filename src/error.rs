//! Error types for preset requests

use thiserror::Error;

/// Errors raised for malformed requests
///
/// Only category-level and page-type mistakes are errors. Unknown preset
/// names never reach this type: they degrade to the category's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    /// Category string that names no preset category, or a category used
    /// where it does not apply (e.g. `dashboard` passed to an atomic lookup)
    #[error("unsupported preset category: {category}")]
    UnsupportedCategory { category: String },

    /// Page type that has no page descriptor
    #[error("unsupported page type: {page}")]
    UnsupportedPage { page: String },
}

impl PresetError {
    /// Create an unsupported category error
    pub fn unsupported_category(category: impl Into<String>) -> Self {
        Self::UnsupportedCategory {
            category: category.into(),
        }
    }

    /// Create an unsupported page error
    pub fn unsupported_page(page: impl Into<String>) -> Self {
        Self::UnsupportedPage { page: page.into() }
    }
}
