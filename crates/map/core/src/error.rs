//! Error type for map-core constructors.
//!
//! Runtime operations on the map (pan, zoom, toggle, drag) have no failure
//! path: inputs outside the valid domain are clamped or ignored. Errors only
//! surface when a session or viewport is built from invalid parameters.

use crate::sprite::SpriteId;

/// Invalid construction parameters for map state.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MapError {
    /// Surface dimensions must be finite and strictly positive.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },

    /// Radius bounds must satisfy `1 <= min <= max`.
    #[error("invalid hex radius bounds [{min}, {max}]")]
    InvalidRadiusBounds { min: f64, max: f64 },

    /// Hex radius must be a finite number.
    #[error("invalid hex radius {0}")]
    InvalidRadius(f64),

    /// Sprite ids must be unique within a session.
    #[error("duplicate sprite id {0}")]
    DuplicateSprite(SpriteId),
}
