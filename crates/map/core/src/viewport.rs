//! Pan/zoom transform between axial hex space and surface pixels.

use crate::config::MapConfig;
use crate::error::MapError;
use crate::hex::{AxialHex, PixelPoint, SurfaceSize, pixel_to_hex};

/// Inclusive range the hex radius is clamped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusBounds {
    min: f64,
    max: f64,
}

impl RadiusBounds {
    /// Geometry uses the floored radius, so `min` must be at least one pixel.
    pub fn new(min: f64, max: f64) -> Result<Self, MapError> {
        if !(min.is_finite() && max.is_finite() && min >= 1.0 && min <= max) {
            return Err(MapError::InvalidRadiusBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> f64 {
        self.min
    }

    pub const fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, radius: f64) -> f64 {
        radius.clamp(self.min, self.max)
    }
}

impl Default for RadiusBounds {
    fn default() -> Self {
        Self {
            min: MapConfig::RADIUS_MIN,
            max: MapConfig::RADIUS_MAX,
        }
    }
}

/// How a wheel delta is converted into a radius delta.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ZoomPolicy {
    /// `delta_y / 20`, independent of the current radius.
    Fixed,
    /// `radius * delta_y / 2000`, proportionally smoother at large radii.
    #[default]
    Scaled,
}

impl ZoomPolicy {
    pub fn radius_delta(self, hex_radius: f64, wheel_delta: f64) -> f64 {
        match self {
            Self::Fixed => wheel_delta / 20.0,
            Self::Scaled => hex_radius * wheel_delta / 2000.0,
        }
    }
}

/// Origin offset and zoom level of the map.
///
/// The radius is stored raw and floored on read, so fractional zoom deltas
/// accumulate until they cross an integer. The raw value always lies within
/// the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    origin: PixelPoint,
    hex_radius_raw: f64,
    bounds: RadiusBounds,
}

impl Viewport {
    pub fn new(origin: PixelPoint, hex_radius: f64, bounds: RadiusBounds) -> Result<Self, MapError> {
        if !hex_radius.is_finite() {
            return Err(MapError::InvalidRadius(hex_radius));
        }
        Ok(Self {
            origin,
            hex_radius_raw: bounds.clamp(hex_radius),
            bounds,
        })
    }

    /// Viewport with hex `{0, 0}` at the center of `surface`.
    pub fn centered(surface: SurfaceSize, config: &MapConfig) -> Result<Self, MapError> {
        Self::new(surface.center(), config.initial_radius, config.radius_bounds)
    }

    /// Pixel location of the center of hex `{0, 0}`.
    pub const fn origin(&self) -> PixelPoint {
        self.origin
    }

    pub fn hex_radius(&self) -> f64 {
        self.hex_radius_raw.floor()
    }

    pub const fn hex_radius_raw(&self) -> f64 {
        self.hex_radius_raw
    }

    pub const fn bounds(&self) -> RadiusBounds {
        self.bounds
    }

    pub fn hex_width(&self) -> f64 {
        3f64.sqrt() * self.hex_radius()
    }

    pub fn hex_row_height(&self) -> f64 {
        1.5 * self.hex_radius()
    }

    pub fn line_width(&self) -> f64 {
        (self.hex_radius() / 40.0).ceil()
    }

    /// Offset from the origin to `pointer`, captured when a pan drag starts.
    pub fn drag_offset(&self, pointer: PixelPoint) -> PixelPoint {
        pointer - self.origin
    }

    /// Changes the radius by `delta`, then moves the origin so that
    /// `anchor_hex` is centered on `anchor_pixel` under the new radius.
    ///
    /// Returns `true` if the viewport changed. Non-finite inputs are ignored.
    pub fn zoom(&mut self, delta: f64, anchor_hex: AxialHex, anchor_pixel: PixelPoint) -> bool {
        if !delta.is_finite() || !anchor_pixel.is_finite() {
            return false;
        }
        let before = *self;

        self.hex_radius_raw = self.bounds.clamp(self.hex_radius_raw + delta);

        let width = self.hex_width();
        let q = anchor_hex.q as f64;
        let r = anchor_hex.r as f64;
        self.origin = PixelPoint::new(
            anchor_pixel.x - q * width - r * width / 2.0,
            anchor_pixel.y - r * 1.5 * self.hex_radius(),
        );

        *self != before
    }

    /// Zooms about the current origin, keeping hex `{0, 0}` in place.
    pub fn zoom_about_origin(&mut self, delta: f64) -> bool {
        self.zoom(delta, AxialHex::ORIGIN, self.origin)
    }

    /// Zooms so that the hex under `cursor` stays under `cursor`.
    pub fn zoom_at_cursor(&mut self, cursor: PixelPoint, wheel_delta: f64, policy: ZoomPolicy) -> bool {
        if !cursor.is_finite() {
            return false;
        }
        let anchor_hex = pixel_to_hex(cursor, self);
        let delta = policy.radius_delta(self.hex_radius(), wheel_delta);
        self.zoom(delta, anchor_hex, cursor)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_about_origin(MapConfig::ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_about_origin(-MapConfig::ZOOM_STEP)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return false;
        }
        self.origin = self.origin + PixelPoint::new(dx, dy);
        true
    }

    /// Places the origin so the map point grabbed at `drag_offset` sits under `pointer`.
    pub fn pan_to(&mut self, pointer: PixelPoint, drag_offset: PixelPoint) -> bool {
        let origin = pointer - drag_offset;
        if !origin.is_finite() || origin == self.origin {
            return false;
        }
        self.origin = origin;
        true
    }

    /// Puts hex `{0, 0}` back at the center of `surface`.
    pub fn recenter(&mut self, surface: SurfaceSize) -> bool {
        let center = surface.center();
        if center == self.origin {
            return false;
        }
        self.origin = center;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::hex_to_pixel;

    fn default_viewport(origin: PixelPoint) -> Viewport {
        Viewport::new(origin, MapConfig::DEFAULT_HEX_RADIUS, RadiusBounds::default()).unwrap()
    }

    fn assert_close(actual: PixelPoint, expected: PixelPoint) {
        assert!(
            actual.distance(expected) < 1e-6,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn derived_quantities_follow_radius() {
        let v = default_viewport(PixelPoint::ZERO);
        assert_eq!(v.hex_radius(), 20.0);
        assert_eq!(v.hex_row_height(), 30.0);
        assert_eq!(v.line_width(), 1.0);

        let v = Viewport::new(PixelPoint::ZERO, 81.0, RadiusBounds::default()).unwrap();
        assert_eq!(v.line_width(), 3.0);
    }

    #[test]
    fn scenario_b_zoom_out_clamps_at_minimum() {
        let mut v = default_viewport(PixelPoint::new(450.0, 300.0));
        for _ in 0..15 {
            v.zoom_out();
        }
        assert_eq!(v.hex_radius(), 10.0);

        assert!(!v.zoom_out());
        assert_eq!(v.hex_radius(), 10.0);
        assert_eq!(v.origin(), PixelPoint::new(450.0, 300.0));
    }

    #[test]
    fn zoom_never_leaves_bounds() {
        let mut v = default_viewport(PixelPoint::ZERO);
        for delta in [1e9, -1e9, 480.0, -0.25, 3.5, -1e-3, 1e12] {
            v.zoom(delta, AxialHex::new(2, 3), PixelPoint::new(5.0, 5.0));
            assert!(v.hex_radius() >= 10.0 && v.hex_radius() <= 500.0);
            assert!(v.hex_radius_raw() >= 10.0 && v.hex_radius_raw() <= 500.0);
        }
    }

    #[test]
    fn sub_pixel_minimum_is_rejected() {
        assert!(matches!(
            RadiusBounds::new(0.5, 500.0),
            Err(MapError::InvalidRadiusBounds { .. })
        ));
        assert!(RadiusBounds::new(0.0, 500.0).is_err());

        let bounds = RadiusBounds::new(1.0, 500.0).unwrap();
        let mut v = Viewport::new(PixelPoint::new(100.0, 100.0), 20.0, bounds).unwrap();
        v.zoom(-100.0, AxialHex::ORIGIN, PixelPoint::new(100.0, 100.0));
        assert_eq!(v.hex_radius(), 1.0);
        assert_eq!(pixel_to_hex(PixelPoint::new(137.0, 140.0), &v), AxialHex::new(8, 27));
    }

    #[test]
    fn zoom_keeps_anchor_hex_under_anchor_pixel() {
        let mut v = default_viewport(PixelPoint::new(300.0, 200.0));
        let anchor = AxialHex::new(-4, 7);
        let pixel = PixelPoint::new(123.4, 567.8);
        for delta in [5.0, -3.0, 100.0, 0.5, -75.0] {
            v.zoom(delta, anchor, pixel);
            assert_close(hex_to_pixel(anchor, &v), pixel);
        }
    }

    #[test]
    fn zoom_at_cursor_keeps_hovered_hex_in_place() {
        let mut v = default_viewport(PixelPoint::new(450.0, 300.0));
        let cursor = PixelPoint::new(610.0, 115.0);
        let hovered = pixel_to_hex(cursor, &v);

        assert!(v.zoom_at_cursor(cursor, 100.0, ZoomPolicy::Fixed));
        assert_eq!(v.hex_radius(), 25.0);
        assert_close(hex_to_pixel(hovered, &v), cursor);
        assert_eq!(pixel_to_hex(cursor, &v), hovered);
    }

    #[test]
    fn zoom_policies_convert_wheel_delta() {
        assert_eq!(ZoomPolicy::Fixed.radius_delta(20.0, 100.0), 5.0);
        assert_eq!(ZoomPolicy::Scaled.radius_delta(20.0, 100.0), 1.0);
        assert_eq!(ZoomPolicy::Scaled.radius_delta(400.0, -100.0), -20.0);
        assert_eq!("fixed".parse::<ZoomPolicy>().unwrap(), ZoomPolicy::Fixed);
        assert_eq!("Scaled".parse::<ZoomPolicy>().unwrap(), ZoomPolicy::Scaled);
    }

    #[test]
    fn fractional_deltas_accumulate_before_flooring() {
        let mut v = default_viewport(PixelPoint::ZERO);
        v.zoom_about_origin(0.4);
        assert_eq!(v.hex_radius(), 20.0);
        v.zoom_about_origin(0.4);
        assert_eq!(v.hex_radius(), 20.0);
        v.zoom_about_origin(0.4);
        assert_eq!(v.hex_radius(), 21.0);
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let mut v = default_viewport(PixelPoint::ZERO);
        assert!(!v.zoom(f64::NAN, AxialHex::ORIGIN, PixelPoint::ZERO));
        assert!(!v.zoom_at_cursor(PixelPoint::new(f64::INFINITY, 0.0), 10.0, ZoomPolicy::Fixed));
        assert_eq!(v, default_viewport(PixelPoint::ZERO));
    }

    #[test]
    fn pan_to_tracks_grabbed_point() {
        let mut v = default_viewport(PixelPoint::new(100.0, 100.0));
        let offset = v.drag_offset(PixelPoint::new(130.0, 90.0));
        assert!(v.pan_to(PixelPoint::new(150.0, 60.0), offset));
        assert_eq!(v.origin(), PixelPoint::new(120.0, 70.0));
        assert!(!v.pan_to(PixelPoint::new(150.0, 60.0), offset));
    }

    #[test]
    fn pan_by_shifts_origin() {
        let mut v = default_viewport(PixelPoint::ZERO);
        assert!(v.pan_by(10.0, -10.0));
        assert_eq!(v.origin(), PixelPoint::new(10.0, -10.0));
        assert!(!v.pan_by(0.0, 0.0));
    }
}
