//! Initial grid patterns

use super::{Grid, LifeError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Glider cells as (row, col), placed away from the origin
pub const GLIDER_CELLS: [(usize, usize); 5] = [(6, 10), (7, 11), (8, 9), (8, 10), (8, 11)];

/// Smallest grid that holds the glider: rows 0..=8, cols 0..=11
pub const GLIDER_MIN_ROWS: usize = 9;
pub const GLIDER_MIN_COLS: usize = 12;

/// Which initial pattern the simulation starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPattern {
    #[default]
    Random,
    Glider,
}

impl SeedPattern {
    /// Seed a grid with this pattern, drawing randomness from `rng`
    pub fn apply_with<R: Rng + ?Sized>(self, grid: &mut Grid, rng: &mut R) -> Result<(), LifeError> {
        match self {
            SeedPattern::Random => {
                seed_random_with(grid, rng);
                Ok(())
            }
            SeedPattern::Glider => seed_fixed_pattern(grid),
        }
    }
}

/// Set every cell to 0 or 1 with equal probability from the thread-local generator
pub fn seed_random(grid: &mut Grid) {
    seed_random_with(grid, &mut rand::thread_rng());
}

/// Set every cell to 0 or 1 with equal probability
pub fn seed_random_with<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for cell in grid.cells_mut() {
        *cell = u64::from(rng.gen_bool(0.5));
    }
}

/// Stamp the glider into the grid without clearing anything else.
///
/// Fails before touching any cell if the grid is smaller than the glider's
/// bounding box.
pub fn seed_fixed_pattern(grid: &mut Grid) -> Result<(), LifeError> {
    if grid.height < GLIDER_MIN_ROWS || grid.width < GLIDER_MIN_COLS {
        return Err(LifeError::config(format!(
            "glider needs at least {}x{} cells, grid is {}x{}",
            GLIDER_MIN_ROWS, GLIDER_MIN_COLS, grid.height, grid.width
        )));
    }

    for (row, col) in GLIDER_CELLS {
        grid.set(row, col, 1)?;
    }
    Ok(())
}
