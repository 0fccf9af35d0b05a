//! Toroidal Game of Life for the terminal
//!
//! The `game_of_life` module holds the automaton: an aging-cell grid that
//! wraps at every edge, the transition engine and the initial seeders. The
//! `app` and `ui` modules drive it from a raw-mode terminal.

pub mod app;
pub mod config;
pub mod game_of_life;
pub mod ui;

pub use config::Settings;
pub use game_of_life::{advance, seed_fixed_pattern, seed_random, Grid, LifeEngine, LifeError};

use anyhow::Result;

/// Main entry point for running the interactive simulation
pub fn run_simulation(settings: Settings) -> Result<()> {
    settings.validate()?;
    app::run(&settings)
}
