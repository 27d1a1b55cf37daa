//! Page descriptors
//!
//! A page descriptor names the composite category a page is built on, the
//! components it shows and the style blocks it needs. Turning a resolved page
//! into markup belongs to a [`PageRenderer`]; this module only supplies the
//! resolved data.

use std::fmt;
use std::str::FromStr;

use crate::atomic::Presets;
use crate::category::{CompositeKind, PresetCategory};
use crate::composite::{CompositePreset, PresetManager, DEFAULT_PRESET};
use crate::error::PresetError;
use crate::style_map;
use crate::value::StyleMap;

/// Script every generated page loads to pick up the active theme
pub const THEME_LOADER_SCRIPT: &str = "../theme-loader.js";

/// Page types with a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Calendar,
    Chatbot,
    Upload,
    Login,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Calendar,
        PageKind::Chatbot,
        PageKind::Upload,
        PageKind::Login,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Calendar => "calendar",
            PageKind::Chatbot => "chatbot",
            PageKind::Upload => "upload",
            PageKind::Login => "login",
        }
    }

    /// A fresh copy of this page's descriptor
    pub fn config(self) -> PageConfig {
        match self {
            PageKind::Calendar => calendar_page(),
            PageKind::Chatbot => chatbot_page(),
            PageKind::Upload => upload_page(),
            PageKind::Login => login_page(),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendar" => Ok(PageKind::Calendar),
            "chatbot" => Ok(PageKind::Chatbot),
            "upload" => Ok(PageKind::Upload),
            "login" => Ok(PageKind::Login),
            other => Err(PresetError::unsupported_page(other)),
        }
    }
}

/// What a page is made of
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Document title
    pub title: String,
    /// Composite category the page is laid out with
    pub layout: CompositeKind,
    /// Component descriptors by region
    pub components: StyleMap,
    /// Style blocks by selector name
    pub styles: StyleMap,
    pub scripts: Vec<String>,
    /// Atomic presets stamped onto page regions, as (category, preset name)
    pub stamps: Vec<(PresetCategory, &'static str)>,
}

/// A page descriptor together with every preset it refers to
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub kind: PageKind,
    pub config: PageConfig,
    pub preset: CompositePreset,
    /// Resolved stamps, in the order the descriptor lists them
    pub stamps: Vec<(PresetCategory, StyleMap)>,
}

/// Turns a resolved page into a document
pub trait PageRenderer {
    fn render(&self, page: &ResolvedPage) -> String;
}

/// Resolve the descriptor of `kind` and the presets it names
pub fn resolve_page(kind: PageKind) -> Result<ResolvedPage, PresetError> {
    let config = kind.config();
    let preset = PresetManager::new().get(config.layout, DEFAULT_PRESET);
    let presets = Presets::new();
    let stamps = config
        .stamps
        .iter()
        .map(|(category, name)| presets.resolve(*category, *name).map(|style| (*category, style)))
        .collect::<Result<Vec<_>, PresetError>>()?;

    tracing::debug!(page = %kind, layout = %config.layout, "resolved page");
    Ok(ResolvedPage {
        kind,
        config,
        preset,
        stamps,
    })
}

/// Parse `page` and resolve it; unsupported page types fail
pub fn resolve_page_str(page: &str) -> Result<ResolvedPage, PresetError> {
    resolve_page(page.parse()?)
}

fn dashboard_sidebar(menu: Vec<&str>) -> StyleMap {
    style_map! { "menu" => menu }
}

fn calendar_page() -> PageConfig {
    PageConfig {
        title: "Calendário - Dashboard".to_string(),
        layout: CompositeKind::Dashboard,
        components: style_map! {
            "header" => style_map! {
                "title" => "Calendário",
                "actions" => vec!["add-event", "filter", "export"],
            },
            "sidebar" => dashboard_sidebar(vec!["dashboard", "calendar", "tasks", "reports"]),
            "main" => style_map! {
                "calendar" => style_map! {
                    "type" => "monthly",
                    "events" => true,
                    "timeSlots" => true,
                },
                "events" => style_map! {
                    "list" => true,
                    "create" => true,
                    "edit" => true,
                },
            },
        },
        styles: style_map! {
            "calendar" => style_map! {
                "background" => "var(--background-secondary)",
                "border" => "1px solid var(--border-primary)",
                "borderRadius" => "12px",
            },
            "event" => style_map! {
                "background" => "var(--primary-color)",
                "color" => "#000",
                "padding" => "8px 12px",
                "borderRadius" => "6px",
            },
        },
        scripts: vec![THEME_LOADER_SCRIPT.to_string()],
        stamps: vec![
            (PresetCategory::Position, "dock-menu"),
            (PresetCategory::Layout, "grid-cards"),
        ],
    }
}

fn chatbot_page() -> PageConfig {
    PageConfig {
        title: "Chatbot IA - Dashboard".to_string(),
        layout: CompositeKind::Dashboard,
        components: style_map! {
            "header" => style_map! {
                "title" => "Chatbot IA",
                "actions" => vec!["settings", "analytics", "export"],
            },
            "sidebar" => dashboard_sidebar(vec!["dashboard", "chatbot", "conversations", "analytics"]),
            "main" => style_map! {
                "chat" => style_map! {
                    "messages" => true,
                    "input" => true,
                    "typing" => true,
                },
                "sidebar" => style_map! {
                    "conversations" => true,
                    "settings" => true,
                },
            },
        },
        styles: style_map! {
            "chat" => style_map! {
                "background" => "var(--background-primary)",
                "border" => "1px solid var(--border-primary)",
                "borderRadius" => "12px",
            },
            "message" => style_map! {
                "user" => style_map! {
                    "background" => "var(--primary-color)",
                    "color" => "#000",
                    "alignSelf" => "flex-end",
                },
                "bot" => style_map! {
                    "background" => "var(--background-secondary)",
                    "color" => "var(--text-primary)",
                    "alignSelf" => "flex-start",
                },
            },
        },
        scripts: vec![THEME_LOADER_SCRIPT.to_string()],
        stamps: Vec::new(),
    }
}

fn upload_page() -> PageConfig {
    PageConfig {
        title: "Upload de Arquivos - Dashboard".to_string(),
        layout: CompositeKind::Dashboard,
        components: style_map! {
            "header" => style_map! {
                "title" => "Upload de Arquivos",
                "actions" => vec!["settings", "help"],
            },
            "sidebar" => dashboard_sidebar(vec!["dashboard", "upload", "files", "analytics"]),
            "main" => style_map! {
                "upload" => style_map! {
                    "dragDrop" => true,
                    "progress" => true,
                    "preview" => true,
                    "multiple" => true,
                },
                "files" => style_map! {
                    "list" => true,
                    "grid" => true,
                    "search" => true,
                    "filter" => true,
                },
            },
        },
        styles: style_map! {
            "upload" => style_map! {
                "border" => "2px dashed var(--border-primary)",
                "borderRadius" => "12px",
                "padding" => "40px",
                "textAlign" => "center",
                "background" => "var(--background-secondary)",
                "transition" => "all 0.3s",
            },
            "upload:hover" => style_map! {
                "borderColor" => "var(--primary-color)",
                "background" => "rgba(16, 185, 129, 0.05)",
            },
        },
        scripts: vec![THEME_LOADER_SCRIPT.to_string()],
        stamps: Vec::new(),
    }
}

fn login_page() -> PageConfig {
    PageConfig {
        title: "Login - Marketing Intelligence Hub".to_string(),
        layout: CompositeKind::LandingPage,
        components: style_map! {
            "hero" => style_map! {
                "title" => "Bem-vindo",
                "subtitle" => "Acesse sua conta",
                "background" => "linear-gradient(135deg, var(--background-primary), var(--background-secondary))",
            },
            "form" => style_map! {
                "fields" => vec!["email", "password"],
                "buttons" => vec!["login", "forgot-password"],
                "social" => vec!["google", "github"],
            },
            "footer" => style_map! {
                "links" => vec!["privacy", "terms", "support"],
            },
        },
        styles: style_map! {
            "form" => style_map! {
                "background" => "var(--background-secondary)",
                "border" => "1px solid var(--border-primary)",
                "borderRadius" => "12px",
                "padding" => "32px",
                "maxWidth" => "400px",
                "margin" => "0 auto",
            },
            "input" => style_map! {
                "background" => "var(--background-primary)",
                "border" => "1px solid var(--border-primary)",
                "borderRadius" => "8px",
                "padding" => "12px 16px",
                "color" => "var(--text-primary)",
                "width" => "100%",
            },
            "button" => style_map! {
                "background" => "var(--primary-color)",
                "color" => "#000",
                "border" => "none",
                "borderRadius" => "8px",
                "padding" => "12px 24px",
                "fontWeight" => "600",
                "cursor" => "pointer",
                "width" => "100%",
            },
        },
        scripts: vec![THEME_LOADER_SCRIPT.to_string()],
        stamps: Vec::new(),
    }
}
