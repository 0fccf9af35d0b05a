//! Run-time state of the simulation loop

use crate::config::SimulationConfig;

/// What the loop needs to know between frames besides the grid itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStatus {
    pub paused: bool,
    pub tick_ms: u64,
    pub generation: u64,
    speed_steps_ms: Vec<u64>,
}

impl FieldStatus {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            paused: config.start_paused,
            tick_ms: config.tick_ms,
            generation: 0,
            speed_steps_ms: config.speed_steps_ms.clone(),
        }
    }

    /// Move to the next speed step, wrapping after the last.
    ///
    /// A tick interval that is not one of the steps jumps to the first step.
    pub fn change_speed(&mut self) {
        let next = self
            .speed_steps_ms
            .iter()
            .position(|&step| step == self.tick_ms)
            .map_or(0, |i| (i + 1) % self.speed_steps_ms.len());

        if let Some(&step) = self.speed_steps_ms.get(next) {
            self.tick_ms = step;
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}
