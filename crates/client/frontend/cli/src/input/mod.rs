//! Input processing for the CLI client.
//!
//! This module owns the crossterm-to-map translation so the rest of the
//! application stays agnostic about key bindings and terminal cell geometry.
//! Mouse cells are mapped to the pixel center of the cell, measured from the
//! top-left corner of the map panel.

use client_frontend_core::{InputEvent, KeyCode as MapKey, PointerButtons};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use map_core::PixelPoint;
use ratatui::layout::Rect;

use crate::config::UiConfig;

/// Wheel delta sent per scroll notch, in DOM `deltaY` units.
pub const WHEEL_NOTCH: f64 = 100.0;

/// High-level outcome of processing a terminal event.
#[derive(Clone, Debug, PartialEq)]
pub enum CliCommand {
    /// Forward to the map host.
    Map(InputEvent),
    ZoomIn,
    ZoomOut,
    ClearSelection,
    Recenter,
    /// Terminal was resized to the given columns and rows.
    Resize(u16, u16),
    /// Exit the application.
    Quit,
    /// No meaningful command was produced.
    None,
}

/// Converts terminal cells to surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMapper {
    cell_width: f64,
    cell_height: f64,
}

impl CellMapper {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            cell_width: ui.cell_width_px,
            cell_height: ui.cell_height_px,
        }
    }

    pub const fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub const fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Pixel center of terminal cell (`column`, `row`) relative to `area`.
    ///
    /// Cells left of or above `area` map to negative pixels, so a drag that
    /// leaves the panel keeps tracking.
    pub fn cell_to_pixel(&self, area: Rect, column: u16, row: u16) -> PixelPoint {
        let dx = f64::from(column) - f64::from(area.x);
        let dy = f64::from(row) - f64::from(area.y);
        PixelPoint::new(
            (dx + 0.5) * self.cell_width,
            (dy + 0.5) * self.cell_height,
        )
    }

    /// Surface pixel dimensions of `area`.
    pub fn area_to_pixels(&self, area: Rect) -> (f64, f64) {
        (
            f64::from(area.width) * self.cell_width,
            f64::from(area.height) * self.cell_height,
        )
    }
}

/// Translates crossterm events into [`CliCommand`]s.
pub struct InputHandler {
    mapper: CellMapper,
    map_area: Rect,
}

impl InputHandler {
    pub fn new(mapper: CellMapper, map_area: Rect) -> Self {
        Self { mapper, map_area }
    }

    /// Updates the panel mouse positions are measured against.
    pub fn set_map_area(&mut self, map_area: Rect) {
        self.map_area = map_area;
    }

    pub const fn map_area(&self) -> Rect {
        self.map_area
    }

    pub fn handle_event(&self, event: &Event) -> CliCommand {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::FocusLost => CliCommand::Map(InputEvent::PointerCancel),
            Event::Resize(columns, rows) => CliCommand::Resize(*columns, *rows),
            _ => CliCommand::None,
        }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> CliCommand {
        if key.kind == KeyEventKind::Release {
            return CliCommand::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return CliCommand::Quit;
        }

        match key.code {
            KeyCode::Char(ch) => Self::handle_char(ch),
            KeyCode::Esc => CliCommand::Quit,
            KeyCode::Left => Self::arrow(MapKey::ArrowLeft),
            KeyCode::Right => Self::arrow(MapKey::ArrowRight),
            KeyCode::Up => Self::arrow(MapKey::ArrowUp),
            KeyCode::Down => Self::arrow(MapKey::ArrowDown),
            _ => CliCommand::None,
        }
    }

    fn handle_char(raw: char) -> CliCommand {
        match raw.to_ascii_lowercase() {
            'q' => CliCommand::Quit,
            '+' | '=' => CliCommand::ZoomIn,
            '-' | '_' => CliCommand::ZoomOut,
            'c' => CliCommand::ClearSelection,
            'r' => CliCommand::Recenter,
            _ => CliCommand::None,
        }
    }

    fn arrow(code: MapKey) -> CliCommand {
        CliCommand::Map(InputEvent::KeyDown { code })
    }

    pub fn handle_mouse(&self, mouse: MouseEvent) -> CliCommand {
        let position = self
            .mapper
            .cell_to_pixel(self.map_area, mouse.column, mouse.row);

        let event = match mouse.kind {
            MouseEventKind::Down(button) => {
                if !self.map_area.contains((mouse.column, mouse.row).into()) {
                    return CliCommand::None;
                }
                let buttons = match button {
                    MouseButton::Left => PointerButtons::PRIMARY,
                    MouseButton::Right => PointerButtons::SECONDARY,
                    MouseButton::Middle => PointerButtons::AUXILIARY,
                };
                InputEvent::PointerDown { buttons, position }
            }
            MouseEventKind::Up(MouseButton::Left) => InputEvent::PointerUp,
            MouseEventKind::Up(_) => return CliCommand::None,
            MouseEventKind::Drag(_) | MouseEventKind::Moved => InputEvent::PointerMove { position },
            MouseEventKind::ScrollDown => InputEvent::Wheel {
                delta_y: WHEEL_NOTCH,
                cursor: position,
            },
            MouseEventKind::ScrollUp => InputEvent::Wheel {
                delta_y: -WHEEL_NOTCH,
                cursor: position,
            },
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return CliCommand::None,
        };
        CliCommand::Map(event)
    }
}
