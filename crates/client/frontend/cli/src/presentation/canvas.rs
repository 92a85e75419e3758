//! [`Surface`] implementation drawing onto a braille canvas.
//!
//! Commands are collected between `clear_surface` and `present`; `present`
//! then draws one full terminal frame. Canvas coordinates are surface pixels
//! with the y axis flipped, since ratatui canvases grow upwards.
use std::collections::HashMap;

use anyhow::Result;
use client_frontend_core::{Rgb, Surface};
use map_core::{PixelPoint, SpriteId};
use ratatui::{
    Terminal,
    backend::Backend,
    style::Color,
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
};

use crate::input::CellMapper;
use crate::presentation::{
    theme,
    ui::{self, ScreenLayout},
};

/// Horizontal run of a filled polygon: `(y, x_start, x_end)` in pixels.
pub type Span = (f64, f64, f64);

#[derive(Clone, Debug, PartialEq)]
enum Shape {
    Stroke { points: Vec<PixelPoint>, color: Color },
    Fill { spans: Vec<Span>, color: Color },
    Sprite { id: SpriteId, center: PixelPoint, size: f64 },
}

pub struct CanvasSurface<B: Backend> {
    terminal: Terminal<B>,
    mapper: CellMapper,
    outline: Color,
    shapes: Vec<Shape>,
    labels: HashMap<SpriteId, String>,
    status: String,
    layout: Option<ScreenLayout>,
}

impl<B: Backend> CanvasSurface<B> {
    pub fn new(terminal: Terminal<B>, mapper: CellMapper) -> Self {
        Self {
            terminal,
            mapper,
            outline: Color::Gray,
            shapes: Vec::new(),
            labels: HashMap::new(),
            status: String::new(),
            layout: None,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Names printed next to sprites.
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = (SpriteId, String)>) {
        self.labels = labels.into_iter().collect();
    }

    /// Header text shown on the next presented frame.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Layout of the last presented frame.
    pub const fn layout(&self) -> Option<ScreenLayout> {
        self.layout
    }
}

impl<B: Backend> Surface for CanvasSurface<B> {
    fn clear_surface(&mut self) {
        self.shapes.clear();
    }

    // Braille dots have a fixed size, so the width is ignored.
    fn set_outline_style(&mut self, _width: f64, color: Rgb, alpha: f64) {
        self.outline = theme::to_color(color, alpha);
    }

    fn stroke_polygon(&mut self, points: &[PixelPoint]) {
        self.shapes.push(Shape::Stroke {
            points: points.to_vec(),
            color: self.outline,
        });
    }

    fn fill_polygon(&mut self, points: &[PixelPoint], color: Rgb, alpha: f64) {
        let step = self.mapper.cell_height() / 4.0;
        self.shapes.push(Shape::Fill {
            spans: scanline_spans(points, step),
            color: theme::to_color(color, alpha),
        });
    }

    fn place_sprite(&mut self, id: SpriteId, position: PixelPoint, size: f64) {
        self.shapes.push(Shape::Sprite {
            id,
            center: position,
            size,
        });
    }

    fn present(&mut self) -> Result<()> {
        let mapper = self.mapper;
        let shapes: &[Shape] = &self.shapes;
        let labels = &self.labels;
        let status = self.status.as_str();
        let mut drawn = None;

        self.terminal.draw(|frame| {
            let layout = ScreenLayout::new(frame.area());
            ui::render_chrome(frame, &layout, status);

            let (width, height) = mapper.area_to_pixels(layout.map);
            let canvas = Canvas::default()
                .marker(Marker::Braille)
                .x_bounds([0.0, width])
                .y_bounds([0.0, height])
                .paint(|ctx| paint(ctx, shapes, labels, height));
            frame.render_widget(canvas, layout.map);
            drawn = Some(layout);
        })?;

        self.layout = drawn;
        Ok(())
    }
}

fn paint(ctx: &mut Context<'_>, shapes: &[Shape], labels: &HashMap<SpriteId, String>, height: f64) {
    let flip = |point: PixelPoint| (point.x, height - point.y);

    for shape in shapes {
        match shape {
            Shape::Stroke { points, color } => {
                for edge in points.windows(2) {
                    let (x1, y1) = flip(edge[0]);
                    let (x2, y2) = flip(edge[1]);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, *color));
                }
            }
            Shape::Fill { spans, color } => {
                for &(y, start, end) in spans {
                    let y = height - y;
                    ctx.draw(&CanvasLine::new(start, y, end, y, *color));
                }
            }
            Shape::Sprite { id, center, size } => {
                let (x, y) = flip(*center);
                let radius = (size / 2.0).max(1.0);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color: theme::SPRITE,
                });
                if let Some(name) = labels.get(id) {
                    ctx.print(x + radius, y, Line::styled(name.clone(), theme::sprite_label()));
                }
            }
        }
    }
}

/// Horizontal spans covering `points`, sampled every `step` pixels.
///
/// Works for open and closed vertex lists; horizontal edges never
/// contribute a crossing.
pub fn scanline_spans(points: &[PixelPoint], step: f64) -> Vec<Span> {
    let mut spans = Vec::new();
    if points.len() < 3 || step.is_nan() || step <= 0.0 {
        return spans;
    }

    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let mut crossings = Vec::with_capacity(points.len());
    let mut y = min_y + step / 2.0;

    while y < max_y {
        crossings.clear();
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            if (a.y <= y && b.y > y) || (b.y <= y && a.y > y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f64::total_cmp);
        spans.extend(crossings.chunks_exact(2).map(|pair| (y, pair[0], pair[1])));
        y += step;
    }

    spans
}
