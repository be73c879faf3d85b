use anyhow::{Context, Result};
use ark_collections::Tuning;
use ark_config::settings::LOG_LEVELS;
use ark_config::ConfigLoader;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

mod commands;
mod config;
mod logging;

use commands::demo::DemoTarget;

/// Ark collections toolkit.
///
/// Runs walkthroughs of every container and inspects the configuration that
/// containers are built with.
///
/// EXAMPLES:
///     ark demo                  Walk through every container
///     ark demo heap             Walk through the heap only
///     ark config                Show effective settings
///     ark --log-level trace demo set
///
/// ENVIRONMENT VARIABLES:
///     ARK_INITIAL_CAPACITY  Starting capacity for new containers
///     ARK_MAX_LOAD_FACTOR   Rehash threshold for Set and HashMap
///     ARK_LOG               Log level (trace, debug, info, warn, error)
///     NO_COLOR              Set to disable colored output
#[derive(Parser)]
#[command(name = "ark")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level, overriding ark.toml and ARK_LOG
    #[arg(long, global = true, ignore_case = true, value_parser = PossibleValuesParser::new(LOG_LEVELS))]
    log_level: Option<String>,

    /// Read project settings from this file instead of searching for ark.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a container walkthrough
    ///
    /// EXAMPLES:
    ///     ark demo            Every container, then a size summary
    ///     ark demo map        HashMap only
    #[command(visible_alias = "d")]
    Demo {
        /// Container to walk through
        #[arg(value_enum, default_value_t = DemoTarget::All)]
        target: DemoTarget,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    if cli_config.no_color {
        colored::control::set_override(false);
    }

    let mut loader = ConfigLoader::new();
    let settings = match &cli.config {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => loader
            .load_from_directory(&std::env::current_dir()?)
            .context("Failed to load configuration")?,
    };

    // Command-line flag overrides every configured level
    let log_level = cli
        .log_level
        .map(|level| level.to_lowercase())
        .unwrap_or_else(|| settings.log_level());
    logging::init(&log_level)?;

    let tuning = Tuning::from_settings(&settings.collections())
        .context("Invalid collection settings")?;
    debug!(
        project_root = ?settings.project_root(),
        initial_capacity = tuning.initial_capacity(),
        max_load_factor = tuning.max_load_factor(),
        "configuration loaded"
    );

    match cli.command {
        Commands::Demo { target } => commands::demo::run(target, tuning)?,
        Commands::Config => commands::config::run(&settings, tuning, &log_level)?,
    }

    Ok(())
}
