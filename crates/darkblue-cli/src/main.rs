//! Dark Blue Role Theme CLI
//!
//! Thin wrapper around darkblue-core for inspecting, exporting and
//! validating role themes.
//!
//! ## Usage
//!
//! ```bash
//! # List roles and the states they declare
//! darkblue roles
//!
//! # Show a role rendered in a state
//! darkblue show danger --state hover
//!
//! # Export the theme as JSON or CSS custom properties
//! darkblue export --format css --output roles.css
//!
//! # Validate a theme document
//! darkblue validate theme.json
//!
//! # Compare a theme document against dark blue
//! darkblue diff theme.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use darkblue_core::{css, dark_blue, InteractionState, RoleName, RoleTheme, StateStyle};

/// Dark Blue - semantic color roles
#[derive(Parser)]
#[command(name = "darkblue")]
#[command(version = "0.1.0")]
#[command(about = "Dark Blue - semantic color roles")]
#[command(
    long_about = "Inspect, export and validate the dark blue role theme: nine semantic roles mapped onto the Tailwind palette."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles and which state overrides they declare
    Roles,

    /// Show the resolved style of a role
    Show {
        /// Role name (danger, error, warning, notice, info, success, active, inactive, preview)
        role: String,
        /// Interaction state: default, hover or disabled
        #[arg(short, long, default_value = "default")]
        state: String,
    },

    /// Export the theme
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a JSON theme document
    Validate {
        file: PathBuf,
    },

    /// List resolved colors in a JSON theme that differ from dark blue
    Diff {
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Css,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load and validate a theme document from disk
fn load_theme(path: &Path) -> Result<RoleTheme> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::info!(path = %path.display(), "validating theme document");
    RoleTheme::from_json(&text).with_context(|| format!("Invalid theme {}", path.display()))
}

fn print_state(style: &StateStyle) {
    for (field, token) in css::fields(style) {
        println!("  {:<13} {:<11} {}", field, token.to_string(), token.hex());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let theme = dark_blue::theme();

    match cli.command {
        Commands::Roles => {
            for (role, style) in theme.iter() {
                let declared: Vec<&str> = InteractionState::ALL
                    .into_iter()
                    .filter(|state| style.declares(*state))
                    .map(|state| state.as_str())
                    .collect();
                println!("{:<9} {}", role, declared.join(", "));
            }
        }

        Commands::Show { role, state } => {
            let role: RoleName = role.parse()?;
            let state: InteractionState = state.parse()?;
            let style = theme.get(role);

            if style.declares(state) {
                println!("{} ({})", role, state);
            } else {
                println!("{} ({}, falls back to default)", role, state);
            }
            print_state(style.resolve(state));
        }

        Commands::Export { format, output } => {
            let rendered = match format {
                ExportFormat::Json => theme.to_json_pretty()? + "\n",
                ExportFormat::Css => css::custom_properties(theme),
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Commands::Validate { file } => {
            load_theme(&file)?;
            println!("{}: valid", file.display());
        }

        Commands::Diff { file } => {
            let other = load_theme(&file)?;
            let mut differences = 0;
            for role in RoleName::ALL {
                for state in InteractionState::ALL {
                    let ours = css::fields(theme.resolve(role, state));
                    let theirs = css::fields(other.resolve(role, state));
                    for ((field, a), (_, b)) in ours.into_iter().zip(theirs) {
                        if a != b {
                            differences += 1;
                            println!("{}.{}.{}: {} -> {}", role, state, field, a, b);
                        }
                    }
                }
            }
            if differences == 0 {
                println!("No differences");
            }
        }
    }

    Ok(())
}
