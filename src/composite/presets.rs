//! Built-in composite preset tables

use std::sync::LazyLock;

use super::CompositePreset;
use crate::registry::PresetTable;
use crate::style_map;
use crate::value::StyleMap;

pub(super) static DASHBOARD: LazyLock<PresetTable<CompositePreset>> = LazyLock::new(|| {
    PresetTable::from_entries([("default", dashboard_default()), ("compact", dashboard_compact())])
});

pub(super) static LANDING_PAGE: LazyLock<PresetTable<CompositePreset>> = LazyLock::new(|| {
    PresetTable::from_entries([("default", landing_default()), ("minimal", landing_minimal())])
});

pub(super) static DOCUMENTATION: LazyLock<PresetTable<CompositePreset>> =
    LazyLock::new(|| PresetTable::from_entries([("default", documentation_default())]));

fn dashboard_colors() -> StyleMap {
    style_map! {
        "primary" => "var(--primary-color)",
        "secondary" => "var(--secondary-color)",
        "background" => "var(--background-primary)",
        "surface" => "var(--background-secondary)",
    }
}

fn dashboard_default() -> CompositePreset {
    CompositePreset::new(
        style_map! {
            "header" => style_map! {
                "height" => "64px",
                "position" => "fixed",
                "background" => "var(--background-primary)",
            },
            "sidebar" => style_map! {
                "width" => "280px",
                "position" => "fixed",
                "background" => "var(--background-secondary)",
                "collapsible" => true,
            },
            "main" => style_map! {
                "padding" => "24px",
                "marginLeft" => "280px",
                "marginTop" => "64px",
            },
            "footer" => style_map! {
                "height" => "60px",
                "background" => "var(--background-secondary)",
            },
        },
        style_map! {
            "colors" => dashboard_colors(),
            "typography" => style_map! {
                "fontFamily" => "var(--font-primary)",
                "heading" => style_map! {
                    "fontFamily" => "var(--font-secondary)",
                    "fontWeight" => 700,
                },
            },
            "spacing" => style_map! {
                "sm" => "8px",
                "md" => "16px",
                "lg" => "24px",
                "xl" => "32px",
            },
        },
        style_map! {
            "card" => "card-marketing",
            "button" => "btn-marketing-primary",
            "input" => "input-marketing",
        },
    )
}

fn dashboard_compact() -> CompositePreset {
    CompositePreset::new(
        style_map! {
            "header" => style_map! {
                "height" => "48px",
                "position" => "fixed",
                "background" => "var(--background-primary)",
            },
            "sidebar" => style_map! {
                "width" => "240px",
                "position" => "fixed",
                "background" => "var(--background-secondary)",
                "collapsible" => true,
            },
            "main" => style_map! {
                "padding" => "16px",
                "marginLeft" => "240px",
                "marginTop" => "48px",
            },
        },
        style_map! {
            "colors" => dashboard_colors(),
            "typography" => style_map! {
                "fontFamily" => "var(--font-primary)",
                "fontSize" => "14px",
            },
            "spacing" => style_map! {
                "sm" => "6px",
                "md" => "12px",
                "lg" => "18px",
                "xl" => "24px",
            },
        },
        style_map! {
            "card" => "card-marketing-compact",
            "button" => "btn-marketing-primary",
            "input" => "input-marketing-compact",
        },
    )
}

fn landing_default() -> CompositePreset {
    CompositePreset::new(
        style_map! {
            "header" => style_map! {
                "height" => "80px",
                "position" => "fixed",
                "transparent" => true,
            },
            "hero" => style_map! {
                "height" => "100vh",
                "background" => "linear-gradient(135deg, var(--background-primary), var(--background-secondary))",
                "centered" => true,
            },
            "sections" => style_map! {
                "padding" => "80px 20px",
                "maxWidth" => "1200px",
            },
        },
        style_map! {
            "colors" => style_map! {
                "primary" => "var(--primary-color)",
                "secondary" => "var(--secondary-color)",
                "accent" => "var(--accent-color)",
                "background" => "var(--background-primary)",
                "text" => "var(--text-primary)",
            },
            "typography" => style_map! {
                "hero" => style_map! {
                    "fontSize" => "4.5rem",
                    "fontWeight" => 900,
                    "fontFamily" => "var(--font-secondary)",
                },
                "heading" => style_map! {
                    "fontSize" => "3.5rem",
                    "fontWeight" => 900,
                    "fontFamily" => "var(--font-secondary)",
                },
                "body" => style_map! {
                    "fontSize" => "1.125rem",
                    "lineHeight" => 1.6,
                    "fontFamily" => "var(--font-primary)",
                },
            },
            "spacing" => style_map! {
                "section" => "80px",
                "element" => "40px",
                "component" => "24px",
            },
        },
        style_map! {
            "hero" => "hero-section-marketing",
            "card" => "card-marketing",
            "button" => "btn-marketing-primary",
            "gradient" => "text-marketing-gradient",
        },
    )
}

fn landing_minimal() -> CompositePreset {
    CompositePreset::new(
        style_map! {
            "header" => style_map! {
                "height" => "60px",
                "position" => "relative",
                "transparent" => false,
            },
            "hero" => style_map! {
                "height" => "80vh",
                "background" => "var(--background-primary)",
                "centered" => true,
            },
            "sections" => style_map! {
                "padding" => "60px 20px",
                "maxWidth" => "800px",
            },
        },
        style_map! {
            "colors" => style_map! {
                "primary" => "var(--primary-color)",
                "background" => "var(--background-primary)",
                "text" => "var(--text-primary)",
            },
            "typography" => style_map! {
                "hero" => style_map! {
                    "fontSize" => "3.5rem",
                    "fontWeight" => 700,
                },
                "heading" => style_map! {
                    "fontSize" => "2.5rem",
                    "fontWeight" => 700,
                },
            },
            "spacing" => style_map! {
                "section" => "60px",
                "element" => "30px",
            },
        },
        style_map! {
            "hero" => "hero-section-minimal",
            "card" => "card-marketing",
            "button" => "btn-marketing-primary",
        },
    )
}

fn documentation_default() -> CompositePreset {
    CompositePreset::new(
        style_map! {
            "header" => style_map! {
                "height" => "70px",
                "position" => "sticky",
            },
            "sidebar" => style_map! {
                "width" => "300px",
                "position" => "fixed",
                "background" => "var(--background-secondary)",
                "searchable" => true,
            },
            "content" => style_map! {
                "maxWidth" => "800px",
                "padding" => "40px",
                "marginLeft" => "300px",
            },
        },
        style_map! {
            "colors" => style_map! {
                "primary" => "var(--primary-color)",
                "secondary" => "var(--secondary-color)",
                "background" => "var(--background-primary)",
                "surface" => "var(--background-secondary)",
                "border" => "var(--border-primary)",
            },
            "typography" => style_map! {
                "h1" => style_map! {
                    "fontSize" => "2.5rem",
                    "fontWeight" => 700,
                    "marginBottom" => "24px",
                },
                "h2" => style_map! {
                    "fontSize" => "2rem",
                    "fontWeight" => 600,
                    "marginBottom" => "20px",
                },
                "h3" => style_map! {
                    "fontSize" => "1.5rem",
                    "fontWeight" => 600,
                    "marginBottom" => "16px",
                },
                "body" => style_map! {
                    "fontSize" => "1rem",
                    "lineHeight" => 1.7,
                    "marginBottom" => "16px",
                },
                "code" => style_map! {
                    "fontFamily" => "monospace",
                    "background" => "var(--background-secondary)",
                    "padding" => "2px 6px",
                    "borderRadius" => "4px",
                },
            },
            "spacing" => style_map! {
                "content" => "40px",
                "paragraph" => "16px",
                "heading" => "24px",
            },
        },
        style_map! {
            "nav" => "doc-navigation",
            "content" => "doc-content",
            "code" => "doc-code-block",
            "search" => "doc-search",
        },
    )
}
