//! Terminal presentation: layout, palette and drawing

pub mod display;
pub mod layout;
pub mod palette;

pub use display::Renderer;
pub use layout::Layout;
pub use palette::{AgeBand, Palette};
