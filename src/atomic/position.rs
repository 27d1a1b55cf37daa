//! Position presets

use std::sync::LazyLock;

use crate::registry::PresetTable;
use crate::style_map;
use crate::value::StyleMap;

static PRESETS: LazyLock<PresetTable> = LazyLock::new(|| {
    PresetTable::from_entries([
        (
            "dock-menu",
            style_map! {
                "position" => "absolute",
                "bottom" => "0",
                "left" => "0",
                "right" => "0",
                "zIndex" => "50",
            },
        ),
        (
            "top-bar",
            style_map! {
                "position" => "fixed",
                "top" => "0",
                "left" => "0",
                "right" => "0",
                "zIndex" => "40",
            },
        ),
        (
            "side-panel",
            style_map! {
                "position" => "fixed",
                "top" => "0",
                "left" => "0",
                "bottom" => "0",
                "width" => "320px",
                "zIndex" => "30",
            },
        ),
        (
            "floating-card",
            style_map! {
                "position" => "absolute",
                "top" => "50%",
                "left" => "50%",
                "transform" => "translate(-50%, -50%)",
                "zIndex" => "20",
            },
        ),
        (
            "sticky-header",
            style_map! {
                "position" => "sticky",
                "top" => "0",
                "zIndex" => "10",
            },
        ),
        ("relative", style_map! { "position" => "relative" }),
        ("absolute", style_map! { "position" => "absolute" }),
        ("fixed", style_map! { "position" => "fixed" }),
    ])
});

/// Input accepted by [`Position::forge`]
#[derive(Debug, Clone, PartialEq)]
pub enum PositionInput {
    /// A preset name, or a raw CSS `position` value when no preset matches
    Name(String),
    /// Modifier tokens applied in order over `{ position: "relative" }`
    Tokens(Vec<String>),
}

impl From<&str> for PositionInput {
    fn from(name: &str) -> Self {
        PositionInput::Name(name.to_string())
    }
}

impl From<String> for PositionInput {
    fn from(name: String) -> Self {
        PositionInput::Name(name)
    }
}

impl From<Vec<String>> for PositionInput {
    fn from(tokens: Vec<String>) -> Self {
        PositionInput::Tokens(tokens)
    }
}

impl From<Vec<&str>> for PositionInput {
    fn from(tokens: Vec<&str>) -> Self {
        PositionInput::Tokens(tokens.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for PositionInput {
    fn from(tokens: &[&str]) -> Self {
        PositionInput::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PositionInput {
    fn from(tokens: [&str; N]) -> Self {
        PositionInput::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Position entity: named placements plus token-built ones
#[derive(Debug, Clone, Copy)]
pub struct Position {
    presets: &'static PresetTable,
}

impl Default for Position {
    fn default() -> Self {
        Self { presets: &PRESETS }
    }
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presets(&self) -> &'static PresetTable {
        self.presets
    }

    /// Resolve a name or a token list to a position style map
    ///
    /// Never fails. An unknown name becomes `{ position: <name> }`, so raw
    /// values like `"sticky"` pass straight through. Token lists start from
    /// `{ position: "relative" }` and apply each token in order; later tokens
    /// overwrite earlier ones field by field and unknown tokens are ignored.
    pub fn forge(&self, input: impl Into<PositionInput>) -> StyleMap {
        match input.into() {
            PositionInput::Name(name) => match self.presets.get(&name) {
                Some(preset) => {
                    tracing::debug!(preset = %name, "resolved position preset");
                    preset.clone()
                }
                None => {
                    tracing::debug!(value = %name, "no position preset, using raw value");
                    style_map! { "position" => name }
                }
            },
            PositionInput::Tokens(tokens) => from_tokens(&tokens),
        }
    }
}

pub(super) fn relative() -> StyleMap {
    style_map! { "position" => "relative" }
}

fn from_tokens(tokens: &[String]) -> StyleMap {
    let mut result = relative();
    for token in tokens {
        match token.as_str() {
            "absolute" | "fixed" | "sticky" => {
                result.insert("position", token.as_str());
            }
            "top" | "right" | "bottom" | "left" => {
                result.insert(token.as_str(), "0");
            }
            "center" => {
                result.insert("top", "50%");
                result.insert("left", "50%");
                result.insert("transform", "translate(-50%, -50%)");
            }
            other => tracing::trace!(token = other, "ignoring unknown position token"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_preset() {
        let dock = Position::new().forge("dock-menu");
        assert_eq!(
            dock,
            style_map! {
                "position" => "absolute",
                "bottom" => "0",
                "left" => "0",
                "right" => "0",
                "zIndex" => "50",
            }
        );
    }

    #[test]
    fn test_remaining_presets_verbatim() {
        let position = Position::new();
        assert_eq!(
            position.forge("top-bar"),
            style_map! {
                "position" => "fixed",
                "top" => "0",
                "left" => "0",
                "right" => "0",
                "zIndex" => "40",
            }
        );
        assert_eq!(
            position.forge("floating-card"),
            style_map! {
                "position" => "absolute",
                "top" => "50%",
                "left" => "50%",
                "transform" => "translate(-50%, -50%)",
                "zIndex" => "20",
            }
        );
        assert_eq!(
            position.forge("sticky-header"),
            style_map! { "position" => "sticky", "top" => "0", "zIndex" => "10" }
        );
        for raw in ["relative", "absolute", "fixed"] {
            assert_eq!(position.forge(raw), style_map! { "position" => raw });
        }
        assert_eq!(position.presets().len(), 8);
    }

    #[test]
    fn test_unknown_name_is_raw_position() {
        let position = Position::new();
        assert_eq!(position.forge("unknown-token"), style_map! { "position" => "unknown-token" });
        assert_eq!(position.forge("sticky"), style_map! { "position" => "sticky" });
    }

    #[test]
    fn test_tokens_last_wins_per_field() {
        let result = Position::new().forge(["absolute", "left", "center"]);
        assert_eq!(
            result,
            style_map! {
                "position" => "absolute",
                "left" => "50%",
                "top" => "50%",
                "transform" => "translate(-50%, -50%)",
            }
        );
    }

    #[test]
    fn test_center_keeps_position() {
        let result = Position::new().forge(["absolute", "center"]);
        assert_eq!(result.get_str("position"), Some("absolute"));
        assert_eq!(result.get_str("transform"), Some("translate(-50%, -50%)"));
    }

    #[test]
    fn test_edge_after_center_overrides() {
        let result = Position::new().forge(["center", "top"]);
        assert_eq!(result.get_str("top"), Some("0"));
        assert_eq!(result.get_str("left"), Some("50%"));
        assert_eq!(result.get_str("position"), Some("relative"));
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let result = Position::new().forge(vec!["diagonal", "fixed", "nowhere"]);
        assert_eq!(result, style_map! { "position" => "fixed" });
    }

    #[test]
    fn test_empty_tokens_is_relative() {
        let result = Position::new().forge(Vec::<String>::new());
        assert_eq!(result, style_map! { "position" => "relative" });
    }

    #[test]
    fn test_returned_copy_is_isolated() {
        let position = Position::new();
        let mut first = position.forge("top-bar");
        first.insert("zIndex", "999");
        first.remove("top");

        let second = position.forge("top-bar");
        assert_eq!(second.get_str("zIndex"), Some("40"));
        assert_eq!(second.get_str("top"), Some("0"));
    }
}
