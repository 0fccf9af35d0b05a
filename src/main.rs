//! Command line entry point for the terminal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use toroidal_life::config::{CliOverrides, LoggingConfig, Settings};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrapping terminal grid")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in the current terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Start paused
        #[arg(long)]
        paused: bool,

        /// Start in monochrome
        #[arg(long)]
        monochrome: bool,

        /// Initial tick interval in milliseconds (overrides config)
        #[arg(short, long)]
        tick_ms: Option<u64>,

        /// Use the light palette
        #[arg(long)]
        light: bool,

        /// Seed with a glider instead of random cells
        #[arg(long)]
        glider: bool,

        /// Write logs to this file instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config, paused, monochrome, tick_ms, light, glider, log_file
        } => {
            let overrides = CliOverrides {
                paused,
                monochrome,
                light,
                glider,
                tick_ms,
                log_file,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);

    init_logging(&settings.logging)?;
    if !config_path.exists() {
        log::warn!("Config file {} not found, using defaults", config_path.display());
    }

    settings.validate()
        .context("Configuration validation failed")?;

    toroidal_life::run_simulation(settings)
}

/// Read the config file without logging, since the logger's target comes from it
fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        Ok(Settings::default())
    }
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(&config.level));

    if let Some(ref path) = config.file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");

    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default().to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("Created: {}", config_path.display());
    println!("Run: toroidal_life run --config {}", config_path.display());

    Ok(())
}
