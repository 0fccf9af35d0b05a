//! Screen layout derived from the terminal size

use crate::config::DisplayConfig;
use anyhow::Result;

/// Row and column of the grid's top-left cell on screen
pub const GRID_ORIGIN: (u16, u16) = (3, 3);

/// Where the grid, its border and the menu sit on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub term_rows: u16,
    pub term_cols: u16,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub origin_row: u16,
    pub origin_col: u16,
}

impl Layout {
    /// Fit a grid into a terminal of `cols` x `rows`, minus the configured padding
    pub fn for_terminal(cols: u16, rows: u16, display: &DisplayConfig) -> Result<Self> {
        if rows < display.min_rows || cols < display.min_cols {
            anyhow::bail!(
                "Terminal is not big enough: {}x{}, need at least {}x{}",
                cols,
                rows,
                display.min_cols,
                display.min_rows
            );
        }

        Ok(Self {
            term_rows: rows,
            term_cols: cols,
            grid_rows: usize::from(rows - display.padding_rows),
            grid_cols: usize::from(cols - display.padding_cols),
            origin_row: GRID_ORIGIN.0,
            origin_col: GRID_ORIGIN.1,
        })
    }

    /// First menu line, two rows below the grid
    pub fn menu_row(&self) -> u16 {
        self.origin_row + self.grid_rows as u16 + 2
    }

    /// Column that centers a line of `width` characters
    pub fn centered_col(&self, width: usize) -> u16 {
        (self.term_cols / 2).saturating_sub((width / 2) as u16)
    }
}
