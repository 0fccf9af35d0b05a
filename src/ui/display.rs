//! Terminal drawing for the grid, its border and the menu

use super::{AgeBand, Layout, Palette};
use crate::app::FieldStatus;
use crate::game_of_life::Grid;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use std::io::{self, Write};

const MENU: &str = "(q)uit     (r)efresh     (s)peed     toggle (c)olors     (p)ause";

/// Draws frames into any writer using the layout fixed at startup
pub struct Renderer {
    layout: Layout,
}

impl Renderer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw border, grid and menu, then flush
    pub fn draw_frame<W: Write>(
        &self,
        out: &mut W,
        grid: &Grid,
        status: &FieldStatus,
        palette: &Palette,
    ) -> io::Result<()> {
        self.draw_border(out, palette)?;
        self.draw_grid(out, grid, palette)?;
        self.draw_menu(out, grid, status, palette)?;
        out.flush()
    }

    /// One-cell frame around the grid
    pub fn draw_border<W: Write>(&self, out: &mut W, palette: &Palette) -> io::Result<()> {
        let top = self.layout.origin_row - 1;
        let left = self.layout.origin_col - 1;
        let bottom = self.layout.origin_row + self.layout.grid_rows as u16;
        let right = self.layout.origin_col + self.layout.grid_cols as u16;
        let horizontal = " ".repeat(self.layout.grid_cols + 2);

        queue!(out, SetBackgroundColor(palette.border_color()))?;
        queue!(out, cursor::MoveTo(left, top), Print(&horizontal))?;
        queue!(out, cursor::MoveTo(left, bottom), Print(&horizontal))?;
        for row in self.layout.origin_row..bottom {
            queue!(out, cursor::MoveTo(left, row), Print(' '))?;
            queue!(out, cursor::MoveTo(right, row), Print(' '))?;
        }
        queue!(out, ResetColor)
    }

    /// Paint every cell as a colored blank, switching color only between runs
    pub fn draw_grid<W: Write>(&self, out: &mut W, grid: &Grid, palette: &Palette) -> io::Result<()> {
        let rows = grid.height.min(self.layout.grid_rows);
        let cols = grid.width.min(self.layout.grid_cols);
        let mut current: Option<Color> = None;

        for row in 0..rows {
            queue!(
                out,
                cursor::MoveTo(self.layout.origin_col, self.layout.origin_row + row as u16)
            )?;
            for col in 0..cols {
                let color = palette.cell_color(AgeBand::from_value(grid.get(row, col)));
                if current != Some(color) {
                    queue!(out, SetBackgroundColor(color))?;
                    current = Some(color);
                }
                queue!(out, Print(' '))?;
            }
        }
        queue!(out, ResetColor)
    }

    /// Key help, current speed and color mode, plus a status line
    pub fn draw_menu<W: Write>(
        &self,
        out: &mut W,
        grid: &Grid,
        status: &FieldStatus,
        palette: &Palette,
    ) -> io::Result<()> {
        let row = self.layout.menu_row();
        let col = self.layout.centered_col(MENU.len());
        let options = format!(
            "{:25}{:<7}     {:<15}",
            "",
            status.tick_ms,
            palette.color_label()
        );
        let state = format!(
            "gen {:<10} live {:<8} {:<6}   (g)lider (n)ext (l)ight/dark   {}",
            status.generation,
            grid.living_count(),
            palette.scheme_label(),
            if status.paused { "PAUSED" } else { "      " }
        );

        queue!(out, ResetColor)?;
        queue!(out, cursor::MoveTo(col, row), Print(MENU))?;
        queue!(out, cursor::MoveTo(col, row + 1), Print(options))?;
        queue!(out, cursor::MoveTo(col, row + 2), Print(state))
    }
}
