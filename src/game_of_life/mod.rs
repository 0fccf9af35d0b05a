//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod rules;
pub mod seed;

pub use error::LifeError;
pub use grid::Grid;
pub use rules::{advance, LifeEngine};
pub use seed::{seed_fixed_pattern, seed_random, seed_random_with, SeedPattern};
