//! Hex-grid coordinate algebra and map session state.
//!
//! `map-core` defines the canonical coordinate conversions (axial, cube and
//! pixel space), the pan/zoom viewport, the hex selection set and the
//! map-anchored sprites. Everything here is pure bookkeeping: no rendering,
//! no input decoding, no I/O. Front-end crates mutate the state exclusively
//! through [`session::MapSession`], which records what changed in
//! [`session::DirtyFlags`] so redraws can be scheduled explicitly.
pub mod config;
pub mod error;
pub mod hex;
pub mod selection;
pub mod session;
pub mod sprite;
pub mod viewport;

pub use config::MapConfig;
pub use error::MapError;
pub use hex::{
    AxialHex, CubeHex, FractionalHex, PixelPoint, SurfaceSize, axial_from_cube, cube_from_axial,
    cube_round, hex_polygon_vertices, hex_round, hex_to_pixel, pixel_to_fractional, pixel_to_hex,
};
pub use selection::SelectionSet;
pub use session::{DirtyFlags, MapSession};
pub use sprite::{DraggableSprite, SpriteDefinition, SpriteId, ensure_unique_ids, sprite_size};
pub use viewport::{RadiusBounds, Viewport, ZoomPolicy};
