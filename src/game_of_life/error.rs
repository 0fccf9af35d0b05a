//! Error types for the automaton core

use thiserror::Error;

/// Failures the core can report to its caller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Bad grid dimensions or a pattern that does not fit the grid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The scratch buffer for a transition could not be allocated
    #[error("failed to allocate a neighbor buffer of {cells} cells")]
    Allocation { cells: usize },
}

impl LifeError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        LifeError::Configuration(message.into())
    }
}
