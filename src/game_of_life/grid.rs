//! Toroidal grid representation for Game of Life

use super::LifeError;
use itertools::iproduct;
use std::fmt;

const OFFSETS: [isize; 3] = [-1, 0, 1];

/// A fixed-size toroidal grid of aging cells.
///
/// A value of `0` is dead; any value `>= 1` is alive, and the magnitude counts
/// the generations the cell has survived in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<u64>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(height: usize, width: usize) -> Result<Self, LifeError> {
        if height == 0 || width == 0 {
            return Err(LifeError::config(format!(
                "grid dimensions must be positive, got {}x{}",
                height, width
            )));
        }

        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Create a grid from explicit rows of cell values
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, LifeError> {
        if rows.is_empty() {
            return Err(LifeError::config("grid cannot be empty"));
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            return Err(LifeError::config("grid width cannot be zero"));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::config(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell value at coordinates, `0` when out of range
    pub fn get(&self, row: usize, col: usize) -> u64 {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            0
        }
    }

    /// Set the cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: u64) -> Result<(), LifeError> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::config(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.height, self.width
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) >= 1
    }

    /// Row-major view of every cell value
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u64] {
        &mut self.cells
    }

    /// Count living neighbors of a cell, wrapping at every edge.
    ///
    /// Liveness is binary here; ages do not weigh the count. On grids
    /// narrower than three cells the same neighbor can be visited twice,
    /// or a cell can see itself.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let h = self.height as isize;
        let w = self.width as isize;

        iproduct!(OFFSETS, OFFSETS)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter(|&(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(h) as usize;
                let c = (col as isize + dc).rem_euclid(w) as usize;
                self.cells[self.index(r, c)] >= 1
            })
            .count() as u8
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.is_alive(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell >= 1).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.is_alive(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
