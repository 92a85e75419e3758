//! Rendering collaborator interface.
//!
//! The map core only describes what to draw. A [`Surface`] implementation
//! owns the actual drawing API (terminal canvas, GPU context, test recorder)
//! and is handed the commands for each frame.
use std::fmt;

use anyhow::Result;
use map_core::{PixelPoint, SpriteId};

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Blends towards black by `1 - alpha`, for surfaces without transparency.
    pub fn scaled(self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let scale = |channel: u8| (f64::from(channel) * alpha).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Drawing primitives the redraw pass relies on.
pub trait Surface {
    fn clear_surface(&mut self);
    fn set_outline_style(&mut self, width: f64, color: Rgb, alpha: f64);
    fn stroke_polygon(&mut self, points: &[PixelPoint]);
    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb, alpha: f64);
    fn place_sprite(&mut self, id: SpriteId, position: PixelPoint, size: f64);
    /// Flushes everything issued since the last clear to the screen.
    fn present(&mut self) -> Result<()>;
}

/// One recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    SetOutlineStyle {
        width: f64,
        color: Rgb,
        alpha: f64,
    },
    StrokePolygon(Vec<PixelPoint>),
    FillPolygon {
        points: Vec<PixelPoint>,
        color: Rgb,
        alpha: f64,
    },
    PlaceSprite {
        id: SpriteId,
        position: PixelPoint,
        size: f64,
    },
}

impl DrawCommand {
    /// Issues this command against `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            Self::Clear => surface.clear_surface(),
            Self::SetOutlineStyle {
                width,
                color,
                alpha,
            } => surface.set_outline_style(*width, *color, *alpha),
            Self::StrokePolygon(points) => surface.stroke_polygon(points),
            Self::FillPolygon {
                points,
                color,
                alpha,
            } => surface.fill_polygon(points, *color, *alpha),
            Self::PlaceSprite { id, position, size } => surface.place_sprite(*id, *position, *size),
        }
    }
}

/// Surface that keeps every command of the current frame plus a present count.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    presents: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands of the most recently presented frame.
    pub fn presented(&self) -> &[DrawCommand] {
        &self.presented
    }

    pub const fn present_count(&self) -> usize {
        self.presents
    }

    pub fn filled(&self) -> impl Iterator<Item = &[PixelPoint]> {
        self.presented.iter().filter_map(|command| match command {
            DrawCommand::FillPolygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn stroked(&self) -> impl Iterator<Item = &[PixelPoint]> {
        self.presented.iter().filter_map(|command| match command {
            DrawCommand::StrokePolygon(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn sprites(&self) -> impl Iterator<Item = (SpriteId, PixelPoint, f64)> + '_ {
        self.presented.iter().filter_map(|command| match command {
            DrawCommand::PlaceSprite { id, position, size } => Some((*id, *position, *size)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear_surface(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn set_outline_style(&mut self, width: f64, color: Rgb, alpha: f64) {
        self.commands.push(DrawCommand::SetOutlineStyle {
            width,
            color,
            alpha,
        });
    }

    fn stroke_polygon(&mut self, points: &[PixelPoint]) {
        self.commands.push(DrawCommand::StrokePolygon(points.to_vec()));
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb, alpha: f64) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
            alpha,
        });
    }

    fn place_sprite(&mut self, id: SpriteId, position: PixelPoint, size: f64) {
        self.commands
            .push(DrawCommand::PlaceSprite { id, position, size });
    }

    fn present(&mut self) -> Result<()> {
        self.presented = self.commands.clone();
        self.presents += 1;
        Ok(())
    }
}
