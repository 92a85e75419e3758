//! Hex coordinate algebra.
//!
//! Three coordinate spaces are involved:
//! - **axial** `(q, r)`: integer hex addresses used for selection and anchors,
//! - **cube** `(x, y, z)` with `x + y + z == 0`: intermediate form for rounding,
//! - **pixel**: surface-space floats, related to axial space by a [`Viewport`].
//!
//! Hexes are pointy-top: rows are `1.5 * radius` apart and odd rows are shifted
//! by half a hex width.

use core::fmt;
use core::ops::{Add, Sub};

use crate::error::MapError;
use crate::viewport::Viewport;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Integer hex address in axial coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialHex {
    pub q: i32,
    pub r: i32,
}

impl AxialHex {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl fmt::Display for AxialHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Un-rounded axial coordinate, as produced by the inverse pixel transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }
}

impl From<AxialHex> for FractionalHex {
    fn from(hex: AxialHex) -> Self {
        Self::new(hex.q as f64, hex.r as f64)
    }
}

/// Cube coordinate. `x + y + z == 0` holds for every value of this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeHex {
    x: f64,
    y: f64,
    z: f64,
}

impl CubeHex {
    /// Builds a cube from its `x` and `z` components; `y` is derived.
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, y: -x - z, z }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub const fn z(&self) -> f64 {
        self.z
    }
}

/// Surface-space point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for PixelPoint {
    type Output = PixelPoint;
    fn add(self, rhs: Self) -> PixelPoint {
        PixelPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPoint {
    type Output = PixelPoint;
    fn sub(self, rhs: Self) -> PixelPoint {
        PixelPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Dimensions of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    width: f64,
    height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Result<Self, MapError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(MapError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

pub fn cube_from_axial(hex: AxialHex) -> CubeHex {
    CubeHex::new(hex.q as f64, hex.r as f64)
}

/// Drops the redundant `y` component. Expects a rounded cube.
pub fn axial_from_cube(cube: CubeHex) -> AxialHex {
    AxialHex::new(cube.x as i32, cube.z as i32)
}

/// Rounds a fractional cube to the nearest integer cube.
///
/// Each component is rounded on its own; the component with the strictly
/// largest rounding error is then recomputed from the other two so the
/// zero-sum invariant holds exactly. Ties discard `x` only when it is strictly
/// worst, then prefer discarding `y` over `z` only when `y` is strictly worse.
pub fn cube_round(cube: CubeHex) -> CubeHex {
    let mut rx = round_half_up(cube.x);
    let mut ry = round_half_up(cube.y);
    let mut rz = round_half_up(cube.z);

    let dx = (rx - cube.x).abs();
    let dy = (ry - cube.y).abs();
    let dz = (rz - cube.z).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy > dz {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    // -0.0 is normalized so rounded cubes compare and print cleanly.
    CubeHex {
        x: rx + 0.0,
        y: ry + 0.0,
        z: rz + 0.0,
    }
}

pub fn hex_round(hex: FractionalHex) -> AxialHex {
    axial_from_cube(cube_round(CubeHex::new(hex.q, hex.r)))
}

/// Pixel center of `hex` under `viewport`.
pub fn hex_to_pixel(hex: AxialHex, viewport: &Viewport) -> PixelPoint {
    let width = viewport.hex_width();
    let origin = viewport.origin();
    let q = hex.q as f64;
    let r = hex.r as f64;
    PixelPoint::new(
        width * (q + r / 2.0) + origin.x,
        viewport.hex_radius() * 1.5 * r + origin.y,
    )
}

/// Inverse of [`hex_to_pixel`] without rounding.
pub fn pixel_to_fractional(point: PixelPoint, viewport: &Viewport) -> FractionalHex {
    let origin = viewport.origin();
    let radius = viewport.hex_radius();
    let x = point.x - origin.x;
    let y = point.y - origin.y;
    FractionalHex::new(
        (x * SQRT_3 / 3.0 - y / 3.0) / radius,
        y * 2.0 / 3.0 / radius,
    )
}

/// Hex containing `point` under `viewport`.
pub fn pixel_to_hex(point: PixelPoint, viewport: &Viewport) -> AxialHex {
    hex_round(pixel_to_fractional(point, viewport))
}

/// Closed outline of the hex centered at `center`: six corners starting at the
/// top, counter-clockwise on screen, with the first corner repeated last.
pub fn hex_polygon_vertices(center: PixelPoint, hex_radius: f64) -> [PixelPoint; 7] {
    let PixelPoint { x, y } = center;
    let half_width = SQRT_3 * hex_radius / 2.0;
    let half_radius = hex_radius / 2.0;
    [
        PixelPoint::new(x, y - hex_radius),
        PixelPoint::new(x - half_width, y - half_radius),
        PixelPoint::new(x - half_width, y + half_radius),
        PixelPoint::new(x, y + hex_radius),
        PixelPoint::new(x + half_width, y + half_radius),
        PixelPoint::new(x + half_width, y - half_radius),
        PixelPoint::new(x, y - hex_radius),
    ]
}

/// Rounds half-way cases towards positive infinity (`-0.5 -> 0`, `0.5 -> 1`).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn viewport(origin: PixelPoint, radius: f64) -> Viewport {
        Viewport::new(origin, radius, Default::default()).unwrap()
    }

    fn assert_point_eq(actual: PixelPoint, expected: PixelPoint) {
        assert!(
            actual.distance(expected) < 1e-6,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn assert_zero_sum(cube: CubeHex) {
        assert_eq!(cube.x() + cube.y() + cube.z(), 0.0, "{cube:?}");
    }

    // ── cube / axial ────────────────────────────────────────────────

    #[test]
    fn cube_from_axial_derives_y() {
        let cube = cube_from_axial(AxialHex::new(3, -5));
        assert_eq!((cube.x(), cube.y(), cube.z()), (3.0, 2.0, -5.0));
        assert_eq!(axial_from_cube(cube), AxialHex::new(3, -5));
    }

    #[test]
    fn cube_round_keeps_zero_sum_for_fractional_inputs() {
        for i in -40..=40 {
            for j in -40..=40 {
                let x = i as f64 * 0.137 + 0.011;
                let z = j as f64 * -0.291 + 0.003;
                let rounded = cube_round(CubeHex::new(x, z));
                assert_zero_sum(rounded);
                assert_eq!(rounded.x().fract(), 0.0);
                assert_eq!(rounded.z().fract(), 0.0);
            }
        }
    }

    #[test]
    fn cube_round_recomputes_x_when_strictly_worst() {
        // dx = 0.4, dy = dz = 0.3
        let rounded = cube_round(CubeHex::new(0.6, -0.3));
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn cube_round_prefers_y_on_x_y_tie() {
        // (0.5, -0.5, 0): dx == dy == 0.5, dz == 0 -> x not strictly worst, y > z
        let rounded = cube_round(CubeHex::new(0.5, 0.0));
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (1.0, -1.0, 0.0));
    }

    #[test]
    fn cube_round_falls_back_to_z_on_x_z_tie() {
        // (0.5, 0, -0.5): dx == dz == 0.5, dy == 0 -> z recomputed
        let rounded = cube_round(CubeHex::new(0.5, -0.5));
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (1.0, 0.0, -1.0));
    }

    #[test]
    fn cube_round_falls_back_to_z_on_y_z_tie() {
        // (0, 0.5, -0.5): dy == dz == 0.5 -> y not strictly worse, z recomputed
        let rounded = cube_round(CubeHex::new(0.0, -0.5));
        assert_eq!((rounded.x(), rounded.y(), rounded.z()), (0.0, 1.0, -1.0));
    }

    #[test]
    fn hex_round_snaps_near_centers() {
        assert_eq!(hex_round(FractionalHex::new(2.1, -0.9)), AxialHex::new(2, -1));
        assert_eq!(hex_round(FractionalHex::new(-3.02, 1.97)), AxialHex::new(-3, 2));
    }

    // ── pixel transforms ────────────────────────────────────────────

    #[test]
    fn scenario_a_pixel_positions_at_default_radius() {
        let v = viewport(PixelPoint::ZERO, 20.0);
        assert!((v.hex_width() - 34.641_016).abs() < 1e-5);
        assert_eq!(v.hex_row_height(), 30.0);
        assert_point_eq(hex_to_pixel(AxialHex::ORIGIN, &v), PixelPoint::ZERO);
        assert_point_eq(
            hex_to_pixel(AxialHex::new(1, 0), &v),
            PixelPoint::new(34.641_016_151, 0.0),
        );
        assert_point_eq(
            hex_to_pixel(AxialHex::new(0, 1), &v),
            PixelPoint::new(17.320_508_076, 30.0),
        );
    }

    #[test]
    fn pixel_to_hex_round_trips_every_center() {
        let origins = [
            PixelPoint::ZERO,
            PixelPoint::new(450.0, 300.0),
            PixelPoint::new(-1234.5, 987.25),
        ];
        for radius in [10.0, 17.0, 20.0, 123.0, 500.0] {
            for origin in origins {
                let v = viewport(origin, radius);
                for q in -50..=50 {
                    for r in -50..=50 {
                        let hex = AxialHex::new(q, r);
                        assert_eq!(pixel_to_hex(hex_to_pixel(hex, &v), &v), hex);
                    }
                }
            }
        }
    }

    #[test]
    fn pixel_to_hex_picks_nearest_hex_off_center() {
        let v = viewport(PixelPoint::new(100.0, 100.0), 20.0);
        // Just inside the right neighbour's half of the shared edge.
        let center = hex_to_pixel(AxialHex::ORIGIN, &v);
        let right = hex_to_pixel(AxialHex::new(1, 0), &v);
        let mid = PixelPoint::new((center.x + right.x) / 2.0, center.y);
        assert_eq!(pixel_to_hex(mid + PixelPoint::new(0.5, 0.0), &v), AxialHex::new(1, 0));
        assert_eq!(pixel_to_hex(mid - PixelPoint::new(0.5, 0.0), &v), AxialHex::ORIGIN);
    }

    #[test]
    fn fractional_inverse_is_exact_before_rounding() {
        let v = viewport(PixelPoint::new(7.0, -3.0), 40.0);
        let frac = pixel_to_fractional(hex_to_pixel(AxialHex::new(4, -7), &v), &v);
        assert!((frac.q - 4.0).abs() < EPSILON);
        assert!((frac.r + 7.0).abs() < EPSILON);
    }

    // ── geometry ────────────────────────────────────────────────────

    #[test]
    fn polygon_is_closed_with_seven_points() {
        let vertices = hex_polygon_vertices(PixelPoint::new(10.0, 10.0), 20.0);
        assert_eq!(vertices.len(), 7);
        assert_eq!(vertices[0], vertices[6]);
        assert_point_eq(vertices[0], PixelPoint::new(10.0, -10.0));
        assert_point_eq(vertices[3], PixelPoint::new(10.0, 30.0));
        for corner in &vertices[..6] {
            assert!((corner.distance(PixelPoint::new(10.0, 10.0)) - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn surface_size_rejects_degenerate_dimensions() {
        assert!(SurfaceSize::new(900.0, 600.0).is_ok());
        assert!(SurfaceSize::new(0.0, 600.0).is_err());
        assert!(SurfaceSize::new(900.0, f64::INFINITY).is_err());
        assert_eq!(
            SurfaceSize::new(900.0, 600.0).unwrap().center(),
            PixelPoint::new(450.0, 300.0)
        );
    }
}
