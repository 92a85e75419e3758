//! Redraw pass: turns a session snapshot into a display list.
use map_core::{
    AxialHex, MapSession, PixelPoint, SurfaceSize, Viewport, hex_polygon_vertices, hex_to_pixel,
};

use crate::surface::{DrawCommand, Rgb, Surface};

/// Colors of the map layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapStyle {
    pub grid: Rgb,
    pub grid_alpha: f64,
    pub selection: Rgb,
    pub selection_alpha: f64,
    pub origin: Rgb,
    pub origin_alpha: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            grid: Rgb::from_hex(0x666666),
            grid_alpha: 1.0,
            selection: Rgb::from_hex(0x232233),
            selection_alpha: 0.75,
            origin: Rgb::from_hex(0x93493a),
            origin_alpha: 1.0,
        }
    }
}

/// Display list for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
    grid_hexes: usize,
}

impl Scene {
    /// Builds the frame from the current session state.
    ///
    /// Sprites are synchronized with the viewport first, so the session is
    /// borrowed mutably.
    pub fn build(session: &mut MapSession, style: &MapStyle) -> Self {
        session.sync_sprites();

        let viewport = *session.viewport();
        let radius = viewport.hex_radius();
        let mut commands = vec![
            DrawCommand::Clear,
            DrawCommand::SetOutlineStyle {
                width: viewport.line_width(),
                color: style.grid,
                alpha: style.grid_alpha,
            },
        ];

        let centers = visible_hex_centers(&viewport, session.surface());
        let grid_hexes = centers.len();
        commands.extend(
            centers
                .into_iter()
                .map(|center| DrawCommand::StrokePolygon(hex_polygon_vertices(center, radius).to_vec())),
        );

        commands.extend(session.sprites().iter().map(|sprite| DrawCommand::PlaceSprite {
            id: sprite.id(),
            position: sprite.pixel_position(),
            size: sprite.size(),
        }));

        let fill = |hex: AxialHex, color: Rgb, alpha: f64| DrawCommand::FillPolygon {
            points: hex_polygon_vertices(hex_to_pixel(hex, &viewport), radius).to_vec(),
            color,
            alpha,
        };
        commands.extend(
            session
                .selection()
                .iter()
                .map(|hex| fill(*hex, style.selection, style.selection_alpha)),
        );
        commands.push(fill(AxialHex::ORIGIN, style.origin, style.origin_alpha));

        Self {
            commands,
            grid_hexes,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of outlined grid hexes.
    pub const fn grid_hexes(&self) -> usize {
        self.grid_hexes
    }

    /// Issues the display list against `surface`. Presenting is left to the caller.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            command.apply(surface);
        }
    }
}

/// Centers of every hex that can intersect `surface`, one margin row and
/// column included on each side.
///
/// The walk starts at the origin reduced modulo one column width and two
/// row pitches, so it always lands on an even row and real hex centers.
pub fn visible_hex_centers(viewport: &Viewport, surface: SurfaceSize) -> Vec<PixelPoint> {
    let width = viewport.hex_width();
    let pitch = viewport.hex_row_height();
    let origin = viewport.origin();

    let start_x = origin.x.rem_euclid(width) - width;
    let start_y = origin.y.rem_euclid(2.0 * pitch) - 2.0 * pitch;
    let max_x = surface.width() + width;
    let max_y = surface.height() + pitch;

    let mut centers = Vec::new();
    let mut row = 0u32;
    let mut y = start_y;
    while y <= max_y {
        let mut x = if row % 2 == 1 {
            start_x + width / 2.0
        } else {
            start_x
        };
        while x <= max_x {
            centers.push(PixelPoint::new(x, y));
            x += width;
        }
        row += 1;
        y = start_y + f64::from(row) * pitch;
    }
    centers
}
