//! Logging initialization for the preset-forge CLI.
//!
//! The library only emits `tracing` events; binaries decide where they go.
//! Filter directives come from the `PRESET_FORGE_LOG` environment variable.
//!
//! ```bash
//! # Default (warnings only)
//! preset-forge resolve position dock-menu
//!
//! # See every lookup and fallback
//! PRESET_FORGE_LOG=debug preset-forge apply dashboard compact
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "PRESET_FORGE_LOG";

/// Directive used when `PRESET_FORGE_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize the tracing subscriber, writing to stderr.
///
/// `verbose` raises the fallback level to `debug` when no directives are set
/// in the environment.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (call once, at
/// startup).
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_DIRECTIVE };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
