//! Preset categories

use std::fmt;
use std::str::FromStr;

use crate::error::PresetError;

/// Every category the registry knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetCategory {
    Position,
    Layout,
    Color,
    Typography,
    Dashboard,
    LandingPage,
    Documentation,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 7] = [
        PresetCategory::Position,
        PresetCategory::Layout,
        PresetCategory::Color,
        PresetCategory::Typography,
        PresetCategory::Dashboard,
        PresetCategory::LandingPage,
        PresetCategory::Documentation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetCategory::Position => "position",
            PresetCategory::Layout => "layout",
            PresetCategory::Color => "color",
            PresetCategory::Typography => "typography",
            PresetCategory::Dashboard => "dashboard",
            PresetCategory::LandingPage => "landingpage",
            PresetCategory::Documentation => "documentation",
        }
    }

    /// The composite kind for this category, if it holds composite presets
    pub fn composite(self) -> Option<CompositeKind> {
        match self {
            PresetCategory::Dashboard => Some(CompositeKind::Dashboard),
            PresetCategory::LandingPage => Some(CompositeKind::LandingPage),
            PresetCategory::Documentation => Some(CompositeKind::Documentation),
            _ => None,
        }
    }

    pub fn is_composite(self) -> bool {
        self.composite().is_some()
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetCategory {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(PresetCategory::Position),
            "layout" => Ok(PresetCategory::Layout),
            "color" => Ok(PresetCategory::Color),
            "typography" => Ok(PresetCategory::Typography),
            "dashboard" => Ok(PresetCategory::Dashboard),
            "landingpage" | "landing-page" => Ok(PresetCategory::LandingPage),
            "documentation" => Ok(PresetCategory::Documentation),
            other => Err(PresetError::unsupported_category(other)),
        }
    }
}

/// Categories whose presets have the `layout` / `theme` / `components` shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    Dashboard,
    LandingPage,
    Documentation,
}

impl CompositeKind {
    pub const ALL: [CompositeKind; 3] = [
        CompositeKind::Dashboard,
        CompositeKind::LandingPage,
        CompositeKind::Documentation,
    ];

    pub fn as_str(self) -> &'static str {
        PresetCategory::from(self).as_str()
    }
}

impl From<CompositeKind> for PresetCategory {
    fn from(kind: CompositeKind) -> Self {
        match kind {
            CompositeKind::Dashboard => PresetCategory::Dashboard,
            CompositeKind::LandingPage => PresetCategory::LandingPage,
            CompositeKind::Documentation => PresetCategory::Documentation,
        }
    }
}

impl TryFrom<PresetCategory> for CompositeKind {
    type Error = PresetError;

    fn try_from(category: PresetCategory) -> Result<Self, Self::Error> {
        category
            .composite()
            .ok_or_else(|| PresetError::unsupported_category(category.as_str()))
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompositeKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<PresetCategory>()?.try_into()
    }
}
