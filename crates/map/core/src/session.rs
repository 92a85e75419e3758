//! Owned map state for one running map view.
//!
//! [`MapSession`] is the single write path for the viewport, the selection
//! and the sprites. Every mutator that changes something records it in
//! [`DirtyFlags`]; the render scheduler drains them with
//! [`MapSession::take_dirty`] once per tick.
use bitflags::bitflags;

use crate::config::MapConfig;
use crate::error::MapError;
use crate::hex::{AxialHex, PixelPoint, SurfaceSize};
use crate::selection::SelectionSet;
use crate::sprite::{DraggableSprite, SpriteDefinition, SpriteId, ensure_unique_ids};
use crate::viewport::Viewport;

bitflags! {
    /// Which parts of the session changed since the last redraw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DirtyFlags: u8 {
        const VIEWPORT  = 1 << 0;
        const SELECTION = 1 << 1;
        const SPRITES   = 1 << 2;
        const SURFACE   = 1 << 3;
    }
}

#[derive(Clone, Debug)]
pub struct MapSession {
    config: MapConfig,
    surface: SurfaceSize,
    viewport: Viewport,
    selection: SelectionSet,
    sprites: Vec<DraggableSprite>,
    dirty: DirtyFlags,
}

impl MapSession {
    /// Starts a session with hex `{0, 0}` centered on `surface`.
    ///
    /// Sprite ids must be unique, since drags address sprites by id.
    pub fn new(
        surface: SurfaceSize,
        config: MapConfig,
        sprites: &[SpriteDefinition],
    ) -> Result<Self, MapError> {
        ensure_unique_ids(sprites)?;
        let viewport = Viewport::centered(surface, &config)?;
        let sprites = sprites
            .iter()
            .map(|definition| DraggableSprite::new(definition, &viewport))
            .collect();

        Ok(Self {
            config,
            surface,
            viewport,
            selection: SelectionSet::new(),
            sprites,
            dirty: DirtyFlags::all(),
        })
    }

    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    pub const fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn sprites(&self) -> &[DraggableSprite] {
        &self.sprites
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&DraggableSprite> {
        self.sprites.iter().find(|sprite| sprite.id() == id)
    }

    pub const fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Returns the accumulated dirty flags and resets them.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }

    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    fn mark_if(&mut self, changed: bool, flags: DirtyFlags) -> bool {
        if changed {
            self.dirty |= flags;
        }
        changed
    }

    // ===== viewport =====

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        let changed = self.viewport.pan_by(dx, dy);
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    pub fn pan_to(&mut self, pointer: PixelPoint, drag_offset: PixelPoint) -> bool {
        let changed = self.viewport.pan_to(pointer, drag_offset);
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    pub fn zoom(&mut self, delta: f64, anchor_hex: AxialHex, anchor_pixel: PixelPoint) -> bool {
        let changed = self.viewport.zoom(delta, anchor_hex, anchor_pixel);
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    /// Zooms at `cursor` using the configured zoom policy.
    pub fn zoom_at_cursor(&mut self, cursor: PixelPoint, wheel_delta: f64) -> bool {
        let changed = self
            .viewport
            .zoom_at_cursor(cursor, wheel_delta, self.config.zoom_policy);
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    pub fn zoom_in(&mut self) -> bool {
        let changed = self.viewport.zoom_in();
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    pub fn zoom_out(&mut self) -> bool {
        let changed = self.viewport.zoom_out();
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    pub fn recenter(&mut self) -> bool {
        let changed = self.viewport.recenter(self.surface);
        self.mark_if(changed, DirtyFlags::VIEWPORT)
    }

    /// Adopts a new surface size. The origin stays where it is.
    pub fn resize(&mut self, surface: SurfaceSize) -> bool {
        let changed = surface != self.surface;
        self.surface = surface;
        self.mark_if(changed, DirtyFlags::SURFACE)
    }

    // ===== selection =====

    /// Returns `true` when `hex` is selected after the call.
    pub fn toggle_hex(&mut self, hex: AxialHex) -> bool {
        let selected = self.selection.toggle(hex);
        self.dirty |= DirtyFlags::SELECTION;
        selected
    }

    pub fn clear_selection(&mut self) -> bool {
        let changed = self.selection.clear();
        self.mark_if(changed, DirtyFlags::SELECTION)
    }

    // ===== sprites =====

    /// Topmost sprite whose hit circle contains `point`.
    pub fn sprite_at(&self, point: PixelPoint, hit_slop: f64) -> Option<SpriteId> {
        self.sprites
            .iter()
            .rev()
            .find(|sprite| sprite.hit_test(point, hit_slop))
            .map(DraggableSprite::id)
    }

    /// Marks the sprite as dragged and returns its current position.
    pub fn begin_sprite_drag(&mut self, id: SpriteId) -> Option<PixelPoint> {
        let sprite = self.sprite_mut(id)?;
        sprite.begin_drag();
        let position = sprite.pixel_position();
        self.dirty |= DirtyFlags::SPRITES;
        Some(position)
    }

    pub fn drag_sprite(&mut self, id: SpriteId, position: PixelPoint) -> bool {
        let changed = self
            .sprite_mut(id)
            .is_some_and(|sprite| sprite.is_dragging() && sprite.move_to(position));
        self.mark_if(changed, DirtyFlags::SPRITES)
    }

    /// Drops the sprite on the nearest hex and returns its new anchor.
    pub fn end_sprite_drag(&mut self, id: SpriteId) -> Option<AxialHex> {
        let viewport = self.viewport;
        let sprite = self.sprite_mut(id)?;
        if !sprite.is_dragging() {
            return None;
        }
        let anchor = sprite.drop_on_nearest(&viewport);
        self.dirty |= DirtyFlags::SPRITES;
        Some(anchor)
    }

    pub fn cancel_sprite_drag(&mut self, id: SpriteId) -> bool {
        let viewport = self.viewport;
        let changed = match self.sprite_mut(id) {
            Some(sprite) if sprite.is_dragging() => {
                sprite.revert(&viewport);
                true
            }
            _ => false,
        };
        self.mark_if(changed, DirtyFlags::SPRITES)
    }

    /// Re-derives every sprite's position and size from the viewport.
    ///
    /// Runs as part of the redraw pass, so it does not mark anything dirty.
    pub fn sync_sprites(&mut self) -> bool {
        let viewport = self.viewport;
        let mut changed = false;
        for sprite in &mut self.sprites {
            changed |= sprite.sync(&viewport);
        }
        changed
    }

    fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut DraggableSprite> {
        self.sprites.iter_mut().find(|sprite| sprite.id() == id)
    }
}
