//! Motion presets for cards and page transitions
//!
//! Each preset describes an enter/exit animation as four style maps
//! (`initial`, `animate`, `exit`, `transition`) in the shape motion
//! libraries consume. Card animations are staggered by the card's index.

use serde::Serialize;

use crate::style_map;
use crate::value::StyleMap;

/// Page transition names, in declaration order
pub const PAGE_ANIMATIONS: [&str; 5] = ["elastic", "fade", "slideUp", "zoom", "rotate"];

/// Card animation names, in declaration order
pub const CARD_ANIMATIONS: [&str; 4] = ["depth", "vanish", "slider", "spin"];

/// An enter/exit animation description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionConfig {
    pub initial: StyleMap,
    pub animate: StyleMap,
    pub exit: StyleMap,
    pub transition: StyleMap,
}

/// Overshooting ease-out curve shared by `elastic`, `rotate` and `depth`
fn back_out() -> Vec<f64> {
    vec![0.34, 1.56, 0.64, 1.0]
}

/// Cards start 0.1s apart
fn card_delay(index: usize) -> f64 {
    index as f64 * 0.1
}

/// Look up a page transition; unknown names give `None`
pub fn page_animation(name: &str) -> Option<MotionConfig> {
    let config = match name {
        "elastic" => MotionConfig {
            initial: style_map! { "opacity" => 0, "scale" => 0.95 },
            animate: style_map! { "opacity" => 1, "scale" => 1 },
            exit: style_map! { "opacity" => 0, "scale" => 0.95 },
            transition: style_map! { "duration" => 0.3, "ease" => back_out() },
        },
        "fade" => MotionConfig {
            initial: style_map! { "opacity" => 0 },
            animate: style_map! { "opacity" => 1 },
            exit: style_map! { "opacity" => 0 },
            transition: style_map! { "duration" => 0.3, "ease" => "easeInOut" },
        },
        "slideUp" => MotionConfig {
            initial: style_map! { "opacity" => 0, "y" => 50 },
            animate: style_map! { "opacity" => 1, "y" => 0 },
            exit: style_map! { "opacity" => 0, "y" => -50 },
            transition: style_map! { "duration" => 0.4, "ease" => vec![0.22, 1.0, 0.36, 1.0] },
        },
        "zoom" => MotionConfig {
            initial: style_map! { "opacity" => 0, "scale" => 0.8 },
            animate: style_map! { "opacity" => 1, "scale" => 1 },
            exit: style_map! { "opacity" => 0, "scale" => 1.2 },
            transition: style_map! { "duration" => 0.4, "ease" => "easeInOut" },
        },
        "rotate" => MotionConfig {
            initial: style_map! { "opacity" => 0, "rotate" => -10, "scale" => 0.95 },
            animate: style_map! { "opacity" => 1, "rotate" => 0, "scale" => 1 },
            exit: style_map! { "opacity" => 0, "rotate" => 10, "scale" => 0.95 },
            transition: style_map! { "duration" => 0.5, "ease" => back_out() },
        },
        other => {
            tracing::debug!(animation = other, "unknown page animation");
            return None;
        }
    };
    Some(config)
}

/// Look up a card animation for the card at `index`; unknown names give
/// `None`
pub fn card_animation(name: &str, index: usize) -> Option<MotionConfig> {
    let delay = card_delay(index);
    let config = match name {
        "depth" => MotionConfig {
            initial: style_map! { "opacity" => 0, "scale" => 0.8, "z" => -100 },
            animate: style_map! { "opacity" => 1, "scale" => 1, "z" => 0 },
            exit: style_map! { "opacity" => 0, "scale" => 0.8, "z" => -100 },
            transition: style_map! {
                "duration" => 0.5,
                "delay" => delay,
                "ease" => back_out(),
                "scale" => style_map! {
                    "type" => "spring",
                    "damping" => 15,
                    "stiffness" => 200,
                    "restDelta" => 0.001,
                },
            },
        },
        "vanish" => MotionConfig {
            initial: style_map! { "opacity" => 0, "scale" => 1.5, "filter" => "blur(150px)" },
            animate: style_map! { "opacity" => 1, "scale" => 1, "filter" => "blur(0px)" },
            exit: style_map! { "opacity" => 0, "scale" => 1.5, "filter" => "blur(150px)" },
            transition: style_map! { "duration" => 2, "delay" => delay, "ease" => "easeInOut" },
        },
        // Every card enters from the right and leaves to the left.
        "slider" => MotionConfig {
            initial: style_map! { "x" => 1000, "opacity" => 0 },
            animate: style_map! { "x" => 0, "opacity" => 1 },
            exit: style_map! { "x" => -1000, "opacity" => 0 },
            transition: style_map! { "duration" => 2, "delay" => delay, "ease" => "easeInOut" },
        },
        "spin" => MotionConfig {
            initial: style_map! { "scale" => 0, "rotate" => -900 },
            animate: style_map! { "scale" => 1, "rotate" => 0 },
            exit: style_map! { "scale" => 0, "rotate" => 900 },
            transition: style_map! { "duration" => 2, "delay" => delay, "ease" => "easeInOut" },
        },
        other => {
            tracing::debug!(animation = other, "unknown card animation");
            return None;
        }
    };
    Some(config)
}
