//! Simulation state driven by the frame loop

use super::{Command, FieldStatus};
use crate::config::Settings;
use crate::game_of_life::{seed_fixed_pattern, seed_random_with, Grid, LifeEngine};
use crate::ui::Palette;
use anyhow::{Context, Result};
use rand::Rng;

/// Whether the loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Grid, engine and controls for one run
pub struct Simulation<R: Rng> {
    pub grid: Grid,
    pub status: FieldStatus,
    pub palette: Palette,
    engine: LifeEngine,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    /// Create a grid of the given size and seed it with the configured pattern
    pub fn new(settings: &Settings, rows: usize, cols: usize, mut rng: R) -> Result<Self> {
        let mut grid = Grid::new(rows, cols).context("Failed to create grid")?;
        settings
            .simulation
            .seed_pattern
            .apply_with(&mut grid, &mut rng)
            .with_context(|| format!("Failed to seed {:?} pattern", settings.simulation.seed_pattern))?;

        log::info!(
            "Seeded {}x{} grid with {:?} pattern, {} live cells",
            rows,
            cols,
            settings.simulation.seed_pattern,
            grid.living_count()
        );

        Ok(Self {
            grid,
            status: FieldStatus::new(&settings.simulation),
            palette: Palette::from_display(&settings.display),
            engine: LifeEngine::new(),
            rng,
        })
    }

    /// Advance one generation unless paused
    pub fn tick(&mut self) -> Result<()> {
        if !self.status.paused {
            self.step()?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        self.engine
            .advance(&mut self.grid)
            .with_context(|| format!("Failed to advance generation {}", self.status.generation))?;
        self.status.generation += 1;
        log::trace!(
            "Generation {}: {} live cells",
            self.status.generation,
            self.grid.living_count()
        );
        Ok(())
    }

    /// Apply a user command
    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Reseed => {
                seed_random_with(&mut self.grid, &mut self.rng);
                self.status.generation = 0;
                log::info!("Reseeded grid, {} live cells", self.grid.living_count());
            }
            Command::Glider => {
                self.grid.clear();
                seed_fixed_pattern(&mut self.grid).context("Failed to place glider")?;
                self.status.generation = 0;
                log::info!("Placed glider on a cleared grid");
            }
            Command::Speed => {
                self.status.change_speed();
                log::debug!("Tick interval now {} ms", self.status.tick_ms);
            }
            Command::ToggleColors => {
                self.palette.toggle_colors();
                log::debug!("Palette is now {}", self.palette.color_label());
            }
            Command::TogglePalette => {
                self.palette.toggle_scheme();
                log::debug!("Palette scheme is now {}", self.palette.scheme_label());
            }
            Command::TogglePause => {
                self.status.toggle_pause();
                log::debug!("Paused: {}", self.status.paused);
            }
            Command::Step => {
                if self.status.paused {
                    self.step()?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}
