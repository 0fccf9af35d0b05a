//! Cell colors derived from age

use crate::config::{DisplayConfig, PaletteScheme};
use crossterm::style::Color;

/// Cell age clamped to the range the palette can show.
///
/// Band 0 is dead, band 1 is a newborn, band 7 covers every age from 7 up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgeBand(u8);

impl AgeBand {
    pub const DEAD: AgeBand = AgeBand(0);
    pub const MAX: u8 = 7;

    pub fn from_value(value: u64) -> Self {
        AgeBand(value.min(Self::MAX as u64) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

/// Background colors for live cells aged 2 through 7+
const AGE_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Red,
];

/// Rendering palette, passed explicitly to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub scheme: PaletteScheme,
    pub colors: bool,
}

impl Palette {
    pub fn new(scheme: PaletteScheme, colors: bool) -> Self {
        Self { scheme, colors }
    }

    pub fn from_display(display: &DisplayConfig) -> Self {
        Self::new(display.palette, display.colors)
    }

    pub fn toggle_colors(&mut self) {
        self.colors = !self.colors;
    }

    pub fn toggle_scheme(&mut self) {
        self.scheme = self.scheme.toggled();
    }

    /// Background color for a cell in the given band
    pub fn cell_color(&self, band: AgeBand) -> Color {
        let (dead, newborn) = match self.scheme {
            PaletteScheme::Dark => (Color::Black, Color::White),
            PaletteScheme::Light => (Color::White, Color::Black),
        };

        match (band.index(), self.colors) {
            (0, true) => dead,
            (0, false) => Color::Reset,
            (_, false) | (1, true) => newborn,
            (n, true) => AGE_COLORS[usize::from(n) - 2],
        }
    }

    /// Border uses the newborn color in every mode
    pub fn border_color(&self) -> Color {
        self.cell_color(AgeBand(1))
    }

    pub fn color_label(&self) -> &'static str {
        if self.colors {
            "colorful"
        } else {
            "monochrome"
        }
    }

    pub fn scheme_label(&self) -> &'static str {
        match self.scheme {
            PaletteScheme::Dark => "dark",
            PaletteScheme::Light => "light",
        }
    }
}
