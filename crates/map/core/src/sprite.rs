//! Map-anchored icons that follow pan/zoom and can be dragged between hexes.

use std::collections::HashSet;
use std::fmt;

use crate::error::MapError;
use crate::hex::{AxialHex, PixelPoint, hex_to_pixel, pixel_to_hex};
use crate::viewport::Viewport;

/// Stable identifier of a sprite within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpriteId(pub u32);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fails on the first id that appears twice in `definitions`.
pub fn ensure_unique_ids(definitions: &[SpriteDefinition]) -> Result<(), MapError> {
    let mut seen = HashSet::with_capacity(definitions.len());
    match definitions.iter().find(|definition| !seen.insert(definition.id)) {
        Some(duplicate) => Err(MapError::DuplicateSprite(duplicate.id)),
        None => Ok(()),
    }
}

/// Static description of a sprite, as supplied by configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteDefinition {
    pub id: SpriteId,
    pub name: String,
    pub anchor: AxialHex,
}

impl SpriteDefinition {
    pub fn new(id: u32, name: impl Into<String>, anchor: AxialHex) -> Self {
        Self {
            id: SpriteId(id),
            name: name.into(),
            anchor,
        }
    }
}

/// Icon edge length for a given hex radius.
pub fn sprite_size(hex_radius: f64) -> f64 {
    hex_radius / 5.0
}

/// Live sprite state.
///
/// While `dragging` is false the pixel position is derived from the anchor
/// hex through the viewport. While dragging it follows the pointer freely.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableSprite {
    id: SpriteId,
    name: String,
    anchor_hex: AxialHex,
    pixel_position: PixelPoint,
    size: f64,
    dragging: bool,
}

impl DraggableSprite {
    pub fn new(definition: &SpriteDefinition, viewport: &Viewport) -> Self {
        Self {
            id: definition.id,
            name: definition.name.clone(),
            anchor_hex: definition.anchor,
            pixel_position: hex_to_pixel(definition.anchor, viewport),
            size: sprite_size(viewport.hex_radius()),
            dragging: false,
        }
    }

    pub const fn id(&self) -> SpriteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn anchor_hex(&self) -> AxialHex {
        self.anchor_hex
    }

    pub const fn pixel_position(&self) -> PixelPoint {
        self.pixel_position
    }

    pub const fn size(&self) -> f64 {
        self.size
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Radius around the center that counts as a hit, never below `hit_slop`.
    pub fn hit_radius(&self, hit_slop: f64) -> f64 {
        (self.size / 2.0).max(hit_slop)
    }

    pub fn hit_test(&self, point: PixelPoint, hit_slop: f64) -> bool {
        self.pixel_position.distance(point) <= self.hit_radius(hit_slop)
    }

    /// Recomputes position and size from the viewport. A sprite being
    /// dragged keeps its free position.
    pub fn sync(&mut self, viewport: &Viewport) -> bool {
        let size = sprite_size(viewport.hex_radius());
        let position = if self.dragging {
            self.pixel_position
        } else {
            hex_to_pixel(self.anchor_hex, viewport)
        };
        let changed = size != self.size || position != self.pixel_position;
        self.size = size;
        self.pixel_position = position;
        changed
    }

    pub(crate) fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub(crate) fn move_to(&mut self, position: PixelPoint) -> bool {
        if !position.is_finite() || position == self.pixel_position {
            return false;
        }
        self.pixel_position = position;
        true
    }

    /// Snaps to the hex nearest the current position and re-anchors there.
    pub(crate) fn drop_on_nearest(&mut self, viewport: &Viewport) -> AxialHex {
        self.dragging = false;
        self.anchor_hex = pixel_to_hex(self.pixel_position, viewport);
        self.pixel_position = hex_to_pixel(self.anchor_hex, viewport);
        self.anchor_hex
    }

    /// Abandons the drag and returns to the previous anchor.
    pub(crate) fn revert(&mut self, viewport: &Viewport) {
        self.dragging = false;
        self.pixel_position = hex_to_pixel(self.anchor_hex, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::RadiusBounds;

    fn viewport(radius: f64) -> Viewport {
        Viewport::new(PixelPoint::new(200.0, 150.0), radius, RadiusBounds::default()).unwrap()
    }

    #[test]
    fn scenario_d_size_follows_radius() {
        let definition = SpriteDefinition::new(1, "Jita", AxialHex::new(3, -1));
        let mut sprite = DraggableSprite::new(&definition, &viewport(20.0));
        assert_eq!(sprite.size(), 4.0);

        sprite.sync(&viewport(500.0));
        assert_eq!(sprite.size(), 100.0);
        sprite.sync(&viewport(10.0));
        assert_eq!(sprite.size(), 2.0);

        assert_eq!(sprite_size(0.0), 0.0);
        assert_eq!(sprite_size(250.0), 50.0);
    }

    #[test]
    fn repeated_ids_are_reported() {
        let unique = [
            SpriteDefinition::new(1, "Jita", AxialHex::ORIGIN),
            SpriteDefinition::new(2, "Amarr", AxialHex::ORIGIN),
        ];
        assert_eq!(ensure_unique_ids(&unique), Ok(()));
        assert_eq!(ensure_unique_ids(&[]), Ok(()));

        let repeated = [
            SpriteDefinition::new(1, "Jita", AxialHex::ORIGIN),
            SpriteDefinition::new(2, "Amarr", AxialHex::new(1, 0)),
            SpriteDefinition::new(2, "Hek", AxialHex::new(2, 0)),
        ];
        assert_eq!(ensure_unique_ids(&repeated), Err(MapError::DuplicateSprite(SpriteId(2))));
    }

    #[test]
    fn position_tracks_anchor_through_viewport() {
        let definition = SpriteDefinition::new(2, "Amarr", AxialHex::new(-2, 4));
        let mut sprite = DraggableSprite::new(&definition, &viewport(20.0));
        let panned = Viewport::new(PixelPoint::new(260.0, 90.0), 35.0, RadiusBounds::default()).unwrap();

        assert!(sprite.sync(&panned));
        assert_eq!(sprite.pixel_position(), hex_to_pixel(AxialHex::new(-2, 4), &panned));
        assert!(!sprite.sync(&panned));
    }

    #[test]
    fn hit_radius_has_a_floor() {
        let definition = SpriteDefinition::new(3, "Dodixie", AxialHex::ORIGIN);
        let sprite = DraggableSprite::new(&definition, &viewport(20.0));
        assert_eq!(sprite.hit_radius(8.0), 8.0);
        assert!(sprite.hit_test(PixelPoint::new(206.0, 150.0), 8.0));
        assert!(!sprite.hit_test(PixelPoint::new(209.0, 150.0), 8.0));

        let big = DraggableSprite::new(&definition, &viewport(400.0));
        assert_eq!(big.hit_radius(8.0), 40.0);
    }

    #[test]
    fn drop_snaps_to_nearest_center() {
        let v = viewport(20.0);
        let definition = SpriteDefinition::new(4, "Rens", AxialHex::ORIGIN);
        let mut sprite = DraggableSprite::new(&definition, &v);

        sprite.begin_drag();
        let target = hex_to_pixel(AxialHex::new(2, 1), &v);
        sprite.move_to(target + PixelPoint::new(3.0, -4.0));
        assert!(!sprite.sync(&v));

        assert_eq!(sprite.drop_on_nearest(&v), AxialHex::new(2, 1));
        assert_eq!(sprite.pixel_position(), target);
        assert!(!sprite.is_dragging());
    }

    #[test]
    fn revert_returns_to_previous_anchor() {
        let v = viewport(20.0);
        let definition = SpriteDefinition::new(5, "Hek", AxialHex::new(1, 1));
        let mut sprite = DraggableSprite::new(&definition, &v);

        sprite.begin_drag();
        sprite.move_to(PixelPoint::new(10.0, 10.0));
        sprite.revert(&v);
        assert_eq!(sprite.anchor_hex(), AxialHex::new(1, 1));
        assert_eq!(sprite.pixel_position(), hex_to_pixel(AxialHex::new(1, 1), &v));
    }
}
