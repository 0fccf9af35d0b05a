//! Configuration management for the terminal Game of Life

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, DisplayConfig, LoggingConfig, PaletteScheme, CliOverrides
};
