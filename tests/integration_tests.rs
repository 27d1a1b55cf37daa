//! Integration tests for preset resolution, composition and projection

use pretty_assertions::assert_eq;
use preset_forge::{
    compose, style_map, CompositeKind, CompositeOverrides, PresetCategory, PresetError,
    PresetForge, StyleMap, StyleValue, StyledElement,
};

#[test]
fn test_position_registry_verbatim() {
    let forge = PresetForge::new();
    let panel = forge.resolve("position", "side-panel").unwrap();
    assert_eq!(
        panel,
        style_map! {
            "position" => "fixed",
            "top" => "0",
            "left" => "0",
            "bottom" => "0",
            "width" => "320px",
            "zIndex" => "30",
        }
    );
}

#[test]
fn test_atomic_copies_are_independent() {
    let forge = PresetForge::new();
    let mut first = forge.presets().layout.forge("grid-cards");
    first.insert("display", "block");
    first.remove("gap");

    let second = forge.presets().layout.forge("grid-cards");
    assert_eq!(second.get_str("display"), Some("grid"));
    assert!(second.contains_key("gap"));
}

#[test]
fn test_unknown_position_name_passes_through() {
    let forge = PresetForge::new();
    assert_eq!(
        forge.resolve("position", "unknown-token").unwrap(),
        style_map! { "position" => "unknown-token" }
    );
}

#[test]
fn test_unknown_style_names_give_empty_maps() {
    let forge = PresetForge::new();
    for category in ["layout", "color", "typography"] {
        assert_eq!(forge.resolve(category, "nope").unwrap(), StyleMap::new(), "{}", category);
    }
}

#[test]
fn test_position_tokens() {
    let forge = PresetForge::new();
    let tokens: Vec<String> = ["absolute", "left", "center"].iter().map(|t| t.to_string()).collect();
    let result = forge.resolve("position", tokens).unwrap();
    assert_eq!(
        result,
        style_map! {
            "position" => "absolute",
            "left" => "50%",
            "top" => "50%",
            "transform" => "translate(-50%, -50%)",
        }
    );

    let empty = forge.resolve("position", Vec::<String>::new()).unwrap();
    assert_eq!(empty, style_map! { "position" => "relative" });
}

#[test]
fn test_sidebar_override_drops_unlisted_fields() {
    let forge = PresetForge::new();
    let base = forge.preset("dashboard", "default").unwrap();
    let overrides = CompositeOverrides::new()
        .with_layout(style_map! { "sidebar" => style_map! { "width" => "300px" } });

    let custom = forge.customize_preset(&base, &overrides);
    let sidebar = custom.layout.get_map("sidebar").unwrap();
    assert_eq!(sidebar, &style_map! { "width" => "300px" });
    assert!(!sidebar.contains_key("position"));
    assert!(!sidebar.contains_key("collapsible"));
    assert_eq!(custom.layout.get_map("header"), base.layout.get_map("header"));
    assert_eq!(custom.theme, base.theme);
    assert_eq!(custom.components, base.components);
}

#[test]
fn test_compose_empty_and_idempotent() {
    let forge = PresetForge::new();
    for kind in CompositeKind::ALL {
        let base = forge.manager().get(kind, "default");
        assert_eq!(compose(&base, &CompositeOverrides::new()), base);

        let overrides = CompositeOverrides::new()
            .with_components(style_map! { "card" => "card-flat" })
            .with_extra("name", "flat");
        let once = compose(&base, &overrides);
        assert_eq!(compose(&once, &overrides), once);
    }
}

#[test]
fn test_compose_leaves_inputs_untouched() {
    let forge = PresetForge::new();
    let base = forge.preset("documentation", "default").unwrap();
    let snapshot = base.clone();
    let overrides = CompositeOverrides::new().with_theme(style_map! { "colors" => "none" });
    let overrides_snapshot = overrides.clone();

    let _ = compose(&base, &overrides);
    assert_eq!(base, snapshot);
    assert_eq!(overrides, overrides_snapshot);
    assert_eq!(forge.preset("documentation", "default").unwrap(), snapshot);
}

#[test]
fn test_unsupported_category() {
    let forge = PresetForge::new();
    assert_eq!(
        forge.preset("blog", "default").unwrap_err(),
        PresetError::unsupported_category("blog")
    );
    assert_eq!(
        forge.resolve("dashboard", "default").unwrap_err(),
        PresetError::unsupported_category("dashboard")
    );
    assert_eq!(
        forge.preset("blog", "default").unwrap_err().to_string(),
        "unsupported preset category: blog"
    );
}

#[test]
fn test_unsupported_page() {
    let forge = PresetForge::new();
    let err = forge.page("pricing").unwrap_err();
    assert_eq!(err, PresetError::unsupported_page("pricing"));
}

#[test]
fn test_landing_page_alias() {
    let forge = PresetForge::new();
    assert_eq!("landing-page".parse::<PresetCategory>(), Ok(PresetCategory::LandingPage));
    assert_eq!(
        forge.preset("landing-page", "minimal").unwrap(),
        forge.preset("landingpage", "minimal").unwrap()
    );
}

#[test]
fn test_overrides_from_toml_compose() {
    let toml = r#"
        variant = "wide"

        [layout.sidebar]
        width = "320px"

        [theme.spacing]
        md = "20px"

        [components]
        button = "btn-ghost"
    "#;

    let forge = PresetForge::new();
    let overrides = CompositeOverrides::from_str(toml).unwrap();
    let custom = forge.customize_preset(&forge.preset("dashboard", "compact").unwrap(), &overrides);

    assert_eq!(custom.layout.get_map("sidebar"), Some(&style_map! { "width" => "320px" }));
    assert_eq!(custom.spacing(), Some(&style_map! { "md" => "20px" }));
    assert_eq!(custom.components.get_str("button"), Some("btn-ghost"));
    assert_eq!(custom.components.get_str("card"), Some("card-marketing-compact"));
    assert_eq!(custom.extra.get("variant"), Some(&StyleValue::from("wide")));
}

#[test]
fn test_overrides_file_missing() {
    let path = std::env::temp_dir().join("preset-forge-missing-overrides.toml");
    let result = CompositeOverrides::from_file(&path);
    assert!(result.is_err());
}

#[test]
fn test_apply_projection() {
    let forge = PresetForge::new();
    let mut element = StyledElement::new();
    forge.apply_preset(&mut element, "landingpage", "default").unwrap();

    assert_eq!(element.property("--header-height"), Some("80px"));
    assert_eq!(element.property("--header-transparent"), Some("true"));
    assert_eq!(element.property("--hero-centered"), Some("true"));
    assert_eq!(element.property("--sections-maxWidth"), Some("1200px"));
    assert_eq!(
        element.classes(),
        &[
            "hero-section-marketing",
            "card-marketing",
            "btn-marketing-primary",
            "text-marketing-gradient",
        ]
    );
}

#[test]
fn test_apply_twice_does_not_duplicate_classes() {
    let forge = PresetForge::new();
    let mut element = StyledElement::new();
    forge.apply_preset(&mut element, "dashboard", "default").unwrap();
    forge.apply_preset(&mut element, "dashboard", "compact").unwrap();

    assert_eq!(element.property("--sidebar-width"), Some("240px"));
    // compact drops the footer, but the earlier property stays
    assert_eq!(element.property("--footer-height"), Some("60px"));
    assert_eq!(
        element.classes(),
        &[
            "card-marketing",
            "btn-marketing-primary",
            "input-marketing",
            "card-marketing-compact",
            "input-marketing-compact",
        ]
    );
}

#[test]
fn test_calendar_page_stamps() {
    let forge = PresetForge::new();
    let page = forge.page("calendar").unwrap();
    assert_eq!(page.config.layout, CompositeKind::Dashboard);
    assert_eq!(page.stamps[0].1, forge.resolve("position", "dock-menu").unwrap());
    assert_eq!(page.stamps[1].1, forge.resolve("layout", "grid-cards").unwrap());
}
