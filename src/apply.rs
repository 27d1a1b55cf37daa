//! Stamping composite presets onto stylable elements
//!
//! The `layout` group becomes CSS custom properties: a region map such as
//! `sidebar = { width = "280px" }` yields `--sidebar-width: 280px`, a scalar
//! entry `gap = "8px"` yields `--gap: 8px`. The `components` group's class
//! names are appended to the element's class list.

use indexmap::IndexMap;

use crate::category::CompositeKind;
use crate::composite::{CompositePreset, PresetManager};
use crate::value::StyleValue;

/// Anything that accepts custom properties and class names
pub trait Stylable {
    /// Set custom property `name` (including its leading `--`) to `value`
    fn set_property(&mut self, name: &str, value: &str);

    /// Append class names to the element's class list
    fn add_classes(&mut self, classes: &[String]);
}

/// Options for projecting a preset onto an element
#[derive(Debug, Clone, Default)]
pub struct ApplyConfig {
    /// Prefix prepended to every class name (e.g. "pf-" for "pf-card-marketing")
    pub class_prefix: Option<String>,

    /// Skip the class list and only write custom properties
    pub properties_only: bool,
}

impl ApplyConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Set whether only custom properties are written
    pub fn with_properties_only(mut self, properties_only: bool) -> Self {
        self.properties_only = properties_only;
        self
    }
}

/// In-memory element recording what a projection wrote
///
/// Properties keep their first-write order; writing the same property again
/// replaces its value. Adding a class that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledElement {
    properties: IndexMap<String, String>,
    classes: Vec<String>,
}

impl StyledElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline `style` attribute value: `--a: 1; --b: 2`
    pub fn style_attribute(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `class` attribute value: space separated class list
    pub fn class_attribute(&self) -> String {
        self.classes.join(" ")
    }
}

impl Stylable for StyledElement {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn add_classes(&mut self, classes: &[String]) {
        for class in classes {
            if !self.has_class(class) {
                self.classes.push(class.clone());
            }
        }
    }
}

/// Resolve `name` within `kind` and project it onto `element`
///
/// Unknown names use the kind's default preset. Returns the preset that was
/// applied.
pub fn apply_preset<E: Stylable + ?Sized>(
    element: &mut E,
    kind: CompositeKind,
    name: &str,
) -> CompositePreset {
    let preset = PresetManager::new().get(kind, name);
    project_preset(element, &preset, &ApplyConfig::default());
    preset
}

/// Project an already resolved preset onto `element`
///
/// Values are written through in their display form; nothing is validated
/// and nothing can fail.
pub fn project_preset<E: Stylable + ?Sized>(
    element: &mut E,
    preset: &CompositePreset,
    config: &ApplyConfig,
) {
    let mut written = 0;
    for (key, value) in preset.layout.iter() {
        match value {
            StyleValue::Map(region) => {
                for (prop, val) in region.iter() {
                    element.set_property(&format!("--{}-{}", key, prop), &val.to_string());
                    written += 1;
                }
            }
            StyleValue::List(items) => {
                for (index, val) in items.iter().enumerate() {
                    element.set_property(&format!("--{}-{}", key, index), &val.to_string());
                    written += 1;
                }
            }
            scalar => {
                element.set_property(&format!("--{}", key), &scalar.to_string());
                written += 1;
            }
        }
    }

    if config.properties_only {
        tracing::debug!(properties = written, "projected preset layout");
        return;
    }

    let classes: Vec<String> = match &config.class_prefix {
        Some(prefix) => preset
            .class_names()
            .map(|class| format!("{}{}", prefix, class))
            .collect(),
        None => preset.class_names().collect(),
    };
    element.add_classes(&classes);
    tracing::debug!(properties = written, classes = classes.len(), "projected preset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composite::CompositeOverrides;
    use crate::style_map;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_dashboard_properties() {
        let mut element = StyledElement::new();
        apply_preset(&mut element, CompositeKind::Dashboard, "default");

        assert_eq!(element.property("--header-height"), Some("64px"));
        assert_eq!(element.property("--sidebar-width"), Some("280px"));
        assert_eq!(element.property("--sidebar-collapsible"), Some("true"));
        assert_eq!(element.property("--main-marginLeft"), Some("280px"));
        assert_eq!(element.property("--footer-height"), Some("60px"));
        assert_eq!(element.properties().count(), 12);
    }

    #[test]
    fn test_apply_classes_in_order() {
        let mut element = StyledElement::new();
        apply_preset(&mut element, CompositeKind::Documentation, "default");
        assert_eq!(
            element.class_attribute(),
            "doc-navigation doc-content doc-code-block doc-search"
        );
    }

    #[test]
    fn test_apply_returns_resolved_preset() {
        let mut element = StyledElement::new();
        let preset = apply_preset(&mut element, CompositeKind::LandingPage, "minimal");
        assert_eq!(preset, PresetManager::new().landing_page("minimal"));
    }

    #[test]
    fn test_scalar_and_list_layout_entries() {
        let preset = CompositePreset::new(
            style_map! { "gap" => "8px", "columns" => vec!["1fr", "2fr"] },
            style_map! {},
            style_map! {},
        );
        let mut element = StyledElement::new();
        project_preset(&mut element, &preset, &ApplyConfig::default());

        assert_eq!(element.property("--gap"), Some("8px"));
        assert_eq!(element.property("--columns-0"), Some("1fr"));
        assert_eq!(element.property("--columns-1"), Some("2fr"));
    }

    #[test]
    fn test_duplicate_classes_added_once() {
        let preset = CompositePreset::new(
            style_map! {},
            style_map! {},
            style_map! { "card" => "card", "panel" => "card", "button" => "btn" },
        );
        let mut element = StyledElement::new();
        project_preset(&mut element, &preset, &ApplyConfig::default());
        project_preset(&mut element, &preset, &ApplyConfig::default());
        assert_eq!(element.classes(), &["card".to_string(), "btn".to_string()]);
    }

    #[test]
    fn test_class_prefix() {
        let mut element = StyledElement::new();
        let preset = PresetManager::new().dashboard("compact");
        project_preset(&mut element, &preset, &ApplyConfig::new().with_class_prefix("pf-"));
        assert!(element.has_class("pf-card-marketing-compact"));
        assert!(!element.has_class("card-marketing-compact"));
    }

    #[test]
    fn test_properties_only() {
        let mut element = StyledElement::new();
        let preset = PresetManager::new().dashboard("default");
        project_preset(&mut element, &preset, &ApplyConfig::new().with_properties_only(true));
        assert!(element.classes().is_empty());
        assert!(element.property("--header-height").is_some());
    }

    #[test]
    fn test_customized_preset_projection() {
        let preset = PresetManager::new().dashboard("default").customize(
            &CompositeOverrides::new()
                .with_layout(style_map! { "sidebar" => style_map! { "width" => "300px" } }),
        );
        let mut element = StyledElement::new();
        project_preset(&mut element, &preset, &ApplyConfig::default());

        assert_eq!(element.property("--sidebar-width"), Some("300px"));
        assert_eq!(element.property("--sidebar-position"), None);
    }

    #[test]
    fn test_style_attribute_snapshot() {
        let mut element = StyledElement::new();
        apply_preset(&mut element, CompositeKind::Documentation, "default");
        insta::assert_snapshot!(
            element.style_attribute(),
            @"--header-height: 70px; --header-position: sticky; --sidebar-width: 300px; --sidebar-position: fixed; --sidebar-background: var(--background-secondary); --sidebar-searchable: true; --content-maxWidth: 800px; --content-padding: 40px; --content-marginLeft: 300px"
        );
    }
}
