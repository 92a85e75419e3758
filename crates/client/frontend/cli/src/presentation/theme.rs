//! Terminal color scheme.
//!
//! Terminals have no alpha channel, so translucent layers are blended
//! towards the black background before they reach ratatui.

use client_frontend_core::{MapStyle, Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Map layers tuned for a dark terminal background.
pub fn map_style() -> MapStyle {
    MapStyle {
        grid: Rgb::from_hex(0x7a7a7a),
        grid_alpha: 1.0,
        selection: Rgb::from_hex(0x5b6cff),
        selection_alpha: 0.75,
        origin: Rgb::from_hex(0x93493a),
        origin_alpha: 1.0,
    }
}

/// Converts a map color to a ratatui color, applying `alpha`.
pub fn to_color(color: Rgb, alpha: f64) -> Color {
    let blended = color.scaled(alpha);
    Color::Rgb(blended.r, blended.g, blended.b)
}

pub const SPRITE: Color = Color::Yellow;

pub fn sprite_label() -> Style {
    Style::default().fg(Color::LightYellow)
}

pub fn header() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn status() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn footer() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}
