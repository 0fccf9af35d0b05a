//! Interactive simulation loop

pub mod command;
pub mod simulation;
pub mod status;
pub mod terminal;

pub use command::Command;
pub use simulation::{Flow, Simulation};
pub use status::FieldStatus;
pub use terminal::TermGuard;

use crate::config::Settings;
use crate::ui::{Layout, Renderer};
use anyhow::{Context, Result};
use crossterm::event;
use std::time::Duration;

/// Run the simulation in the current terminal until the user quits
pub fn run(settings: &Settings) -> Result<()> {
    let mut term = TermGuard::new().context("Failed to initialize terminal")?;

    let (cols, rows) = term.size().context("Failed to read terminal size")?;
    let layout = Layout::for_terminal(cols, rows, &settings.display)?;
    log::info!(
        "Terminal {}x{}, grid {}x{}",
        cols,
        rows,
        layout.grid_rows,
        layout.grid_cols
    );

    let mut sim = Simulation::new(settings, layout.grid_rows, layout.grid_cols, rand::thread_rng())?;
    let renderer = Renderer::new(layout);

    loop {
        renderer
            .draw_frame(&mut term.out, &sim.grid, &sim.status, &sim.palette)
            .context("Failed to draw frame")?;

        sim.tick()?;

        // The tick interval doubles as the input timeout
        if event::poll(Duration::from_millis(sim.status.tick_ms)).context("Failed to poll input")? {
            let event = event::read().context("Failed to read input")?;
            if let Some(command) = Command::from_event(&event) {
                if sim.handle(command)? == Flow::Quit {
                    log::info!("Quit after {} generations", sim.status.generation);
                    return Ok(());
                }
            }
        }
    }
}
