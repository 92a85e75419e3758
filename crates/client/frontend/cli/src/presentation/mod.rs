//! Terminal rendering: screen layout, colors and the canvas surface.
pub mod canvas;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use canvas::CanvasSurface;
