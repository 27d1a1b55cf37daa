//! Preset Forge CLI
//!
//! Usage:
//!   preset-forge list [CATEGORY]
//!   preset-forge resolve <CATEGORY> <INPUT>... [--tokens]
//!   preset-forge compose <CATEGORY> [NAME] [-o FILE]
//!   preset-forge apply <CATEGORY> [NAME] [-o FILE] [--class-prefix PREFIX]
//!   preset-forge page <TYPE>
//!   preset-forge motion <page|card> <NAME> [--index N]

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use preset_forge::{
    card_animation, logging, page_animation, project_preset, ApplyConfig, CompositeKind,
    CompositeOverrides, ForgeInput, PresetCategory, PresetForge, StyleMap, StyledElement,
    DEFAULT_PRESET, VERSION,
};

#[derive(Parser)]
#[command(name = "preset-forge")]
#[command(about = "Resolve, customize and apply named visual presets")]
#[command(version = VERSION)]
struct Cli {
    /// Log every lookup and fallback (overridden by PRESET_FORGE_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List preset names, for one category or all of them
    List {
        category: Option<String>,
    },

    /// Resolve an atomic preset (position, layout, color, typography)
    Resolve {
        category: String,

        /// Preset name, raw value, or modifier tokens with --tokens
        #[arg(required = true)]
        input: Vec<String>,

        /// Treat the input as position modifier tokens
        #[arg(short, long)]
        tokens: bool,
    },

    /// Print a composite preset, optionally customized
    Compose {
        category: String,

        #[arg(default_value = DEFAULT_PRESET)]
        name: String,

        /// Overrides file (TOML with [layout], [theme], [components])
        #[arg(short, long)]
        overrides: Option<PathBuf>,
    },

    /// Print the style and class attributes a composite preset produces
    Apply {
        category: String,

        #[arg(default_value = DEFAULT_PRESET)]
        name: String,

        /// Overrides file (TOML with [layout], [theme], [components])
        #[arg(short, long)]
        overrides: Option<PathBuf>,

        /// Prefix for every class name
        #[arg(long)]
        class_prefix: Option<String>,
    },

    /// Show a page descriptor and the preset it is laid out with
    Page {
        page: String,
    },

    /// Print a motion preset
    Motion {
        kind: MotionKind,

        name: String,

        /// Card position, used to stagger card animations
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MotionKind {
    Page,
    Card,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(message) = run(cli.command) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    let forge = PresetForge::new();

    match command {
        Command::List { category } => list(&forge, category.as_deref()),
        Command::Resolve {
            category,
            input,
            tokens,
        } => {
            let input = if tokens {
                ForgeInput::Tokens(input)
            } else {
                ForgeInput::Name(input.join(" "))
            };
            let resolved = forge.resolve(&category, input).map_err(|e| e.to_string())?;
            print_toml(&resolved)
        }
        Command::Compose {
            category,
            name,
            overrides,
        } => {
            let preset = composed(&forge, &category, &name, overrides.as_ref())?;
            print_toml(&preset)
        }
        Command::Apply {
            category,
            name,
            overrides,
            class_prefix,
        } => {
            let preset = composed(&forge, &category, &name, overrides.as_ref())?;
            let config = match class_prefix {
                Some(prefix) => ApplyConfig::new().with_class_prefix(prefix),
                None => ApplyConfig::new(),
            };
            let mut element = StyledElement::new();
            project_preset(&mut element, &preset, &config);
            println!("style=\"{}\"", element.style_attribute());
            println!("class=\"{}\"", element.class_attribute());
            Ok(())
        }
        Command::Page { page } => {
            let resolved = forge.page(&page).map_err(|e| e.to_string())?;
            let mut summary = StyleMap::new()
                .with("title", resolved.config.title.as_str())
                .with("layout", resolved.config.layout.as_str())
                .with("scripts", resolved.config.scripts.clone());
            for (category, style) in &resolved.stamps {
                summary.insert(format!("stamp-{}", category), style.clone());
            }
            summary.insert("components", resolved.config.components.clone());
            summary.insert("styles", resolved.config.styles.clone());
            print_toml(&summary)?;
            println!();
            println!("# {} preset ({})", resolved.config.layout, DEFAULT_PRESET);
            print_toml(&resolved.preset)
        }
        Command::Motion { kind, name, index } => {
            let motion = match kind {
                MotionKind::Page => page_animation(&name),
                MotionKind::Card => card_animation(&name, index),
            };
            match motion {
                Some(config) => print_toml(&config),
                None => Err(format!("no motion preset named '{}'", name)),
            }
        }
    }
}

fn list(forge: &PresetForge, category: Option<&str>) -> Result<(), String> {
    let categories = match category {
        Some(name) => vec![name.parse::<PresetCategory>().map_err(|e| e.to_string())?],
        None => PresetCategory::ALL.to_vec(),
    };

    for category in categories {
        let names = match CompositeKind::try_from(category) {
            Ok(kind) => forge.manager().names(kind),
            Err(_) => forge.presets().names(category).map_err(|e| e.to_string())?,
        };
        println!("{}: {}", category, names.join(", "));
    }
    Ok(())
}

fn composed(
    forge: &PresetForge,
    category: &str,
    name: &str,
    overrides: Option<&PathBuf>,
) -> Result<preset_forge::CompositePreset, String> {
    let base = forge.preset(category, name).map_err(|e| e.to_string())?;
    match overrides {
        Some(path) => {
            let overrides = CompositeOverrides::from_file(path)
                .map_err(|e| format!("loading overrides '{}': {}", path.display(), e))?;
            Ok(forge.customize_preset(&base, &overrides))
        }
        None => Ok(base),
    }
}

fn print_toml<T: Serialize>(value: &T) -> Result<(), String> {
    let text = toml::to_string(value).map_err(|e| e.to_string())?;
    print!("{}", text);
    Ok(())
}
