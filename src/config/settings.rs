//! Configuration settings for the terminal Game of Life

use crate::game_of_life::SeedPattern;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub seed_pattern: SeedPattern,
    pub start_paused: bool,
    /// Initial delay between generations, in milliseconds
    pub tick_ms: u64,
    /// Tick intervals cycled through by the speed key
    pub speed_steps_ms: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub palette: PaletteScheme,
    pub colors: bool,
    pub padding_rows: u16,
    pub padding_cols: u16,
    pub min_rows: u16,
    pub min_cols: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteScheme {
    Dark,
    Light,
}

impl PaletteScheme {
    pub fn toggled(self) -> Self {
        match self {
            PaletteScheme::Dark => PaletteScheme::Light,
            PaletteScheme::Light => PaletteScheme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                seed_pattern: SeedPattern::Random,
                start_paused: false,
                tick_ms: 50,
                speed_steps_ms: vec![10, 25, 50, 100, 200, 500, 1000],
            },
            display: DisplayConfig {
                palette: PaletteScheme::Dark,
                colors: true,
                padding_rows: 10,
                padding_cols: 6,
                min_rows: 20,
                min_cols: 64,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if sim.tick_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        if sim.speed_steps_ms.is_empty() {
            anyhow::bail!("At least one speed step is required");
        }

        if sim.speed_steps_ms.contains(&0) {
            anyhow::bail!("Speed steps must be positive");
        }

        if sim.speed_steps_ms.windows(2).any(|pair| pair[0] >= pair[1]) {
            anyhow::bail!("Speed steps must be strictly increasing: {:?}", sim.speed_steps_ms);
        }

        let display = &self.display;
        if display.padding_rows >= display.min_rows || display.padding_cols >= display.min_cols {
            anyhow::bail!(
                "Padding {}x{} leaves no room for the grid on a {}x{} terminal",
                display.padding_rows,
                display.padding_cols,
                display.min_rows,
                display.min_cols
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if cli_overrides.paused {
            self.simulation.start_paused = true;
        }
        if cli_overrides.monochrome {
            self.display.colors = false;
        }
        if cli_overrides.light {
            self.display.palette = PaletteScheme::Light;
        }
        if cli_overrides.glider {
            self.simulation.seed_pattern = SeedPattern::Glider;
        }
        if let Some(tick_ms) = cli_overrides.tick_ms {
            self.simulation.tick_ms = tick_ms;
        }
        if let Some(ref log_file) = cli_overrides.log_file {
            self.logging.file = Some(log_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub paused: bool,
    pub monochrome: bool,
    pub light: bool,
    pub glider: bool,
    pub tick_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.simulation.speed_steps_ms.contains(&settings.simulation.tick_ms));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.seed_pattern = SeedPattern::Glider;
        settings.display.palette = PaletteScheme::Light;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
simulation:
  seed_pattern: glider
  start_paused: true
  tick_ms: 100
  speed_steps_ms: [50, 100, 200]
display:
  palette: light
  colors: false
  padding_rows: 10
  padding_cols: 6
  min_rows: 20
  min_cols: 64
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.simulation.seed_pattern, SeedPattern::Glider);
        assert!(settings.simulation.start_paused);
        assert_eq!(settings.display.palette, PaletteScheme::Light);
        assert!(!settings.display.colors);
        assert_eq!(settings.logging, LoggingConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.tick_ms = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.speed_steps_ms.clear();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.speed_steps_ms = vec![100, 50];
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.padding_rows = 20;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "simulation: [not, a, map]\n").unwrap();
        assert!(Settings::from_file(&path).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            paused: true,
            monochrome: true,
            light: true,
            glider: true,
            tick_ms: Some(200),
            log_file: Some(PathBuf::from("life.log")),
        };
        settings.merge_with_cli(&overrides);

        assert!(settings.simulation.start_paused);
        assert!(!settings.display.colors);
        assert_eq!(settings.display.palette, PaletteScheme::Light);
        assert_eq!(settings.simulation.seed_pattern, SeedPattern::Glider);
        assert_eq!(settings.simulation.tick_ms, 200);
        assert_eq!(settings.logging.file, Some(PathBuf::from("life.log")));
    }

    #[test]
    fn test_empty_overrides_change_nothing() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides::default());
        assert_eq!(settings, Settings::default());
    }
}
