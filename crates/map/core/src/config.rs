use crate::error::MapError;
use crate::viewport::{RadiusBounds, ZoomPolicy};

/// Map constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    /// Allowed range for the hex radius, in pixels.
    pub radius_bounds: RadiusBounds,
    /// Hex radius a new session starts with.
    pub initial_radius: f64,
    /// Conversion from wheel delta to radius delta.
    pub zoom_policy: ZoomPolicy,
}

impl MapConfig {
    // ===== compile-time constants =====
    pub const RADIUS_MIN: f64 = 10.0;
    pub const RADIUS_MAX: f64 = 500.0;
    pub const DEFAULT_HEX_RADIUS: f64 = 20.0;

    /// Pointer displacement (pixels) that turns a press into a drag.
    pub const DRAG_THRESHOLD: f64 = 4.0;
    /// Origin shift (pixels) applied per arrow key press.
    pub const KEY_PAN_STEP: f64 = 10.0;
    /// Radius step used by the `zoom_in` / `zoom_out` convenience wrappers.
    pub const ZOOM_STEP: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            radius_bounds: RadiusBounds::default(),
            initial_radius: Self::DEFAULT_HEX_RADIUS,
            zoom_policy: ZoomPolicy::default(),
        }
    }

    /// Builds a config with custom radius bounds and initial radius.
    pub fn with_radius(min: f64, max: f64, initial: f64) -> Result<Self, MapError> {
        if !initial.is_finite() {
            return Err(MapError::InvalidRadius(initial));
        }
        Ok(Self {
            radius_bounds: RadiusBounds::new(min, max)?,
            initial_radius: initial,
            ..Self::new()
        })
    }

    #[must_use]
    pub const fn with_zoom_policy(mut self, zoom_policy: ZoomPolicy) -> Self {
        self.zoom_policy = zoom_policy;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
