//! Pointer, wheel and key handling.
//!
//! [`InteractionController`] classifies raw events into clicks, pans and
//! sprite drags and applies them to a [`MapSession`]. It owns nothing but
//! the gesture state; the session is passed in on every call.
use std::mem;

use map_core::{MapSession, PixelPoint, SpriteId, pixel_to_hex};

use crate::config::InteractionConfig;
use crate::event::EventImpact;
use crate::input::{InputEvent, KeyCode, PointerButtons};

/// Gesture in progress for the single tracked pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pressed on empty map; becomes a pan once the pointer travels far enough.
    PendingClick {
        down_point: PixelPoint,
        drag_offset: PixelPoint,
    },
    Panning {
        drag_offset: PixelPoint,
    },
    DraggingSprite {
        sprite: SpriteId,
        offset: PixelPoint,
    },
}

impl GestureState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PendingClick { .. } => "pending_click",
            Self::Panning { .. } => "panning",
            Self::DraggingSprite { .. } => "dragging_sprite",
        }
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    config: InteractionConfig,
    gesture: GestureState,
    last_pointer: Option<PixelPoint>,
}

impl InteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            gesture: GestureState::Idle,
            last_pointer: None,
        }
    }

    pub const fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub const fn last_pointer(&self) -> Option<PixelPoint> {
        self.last_pointer
    }

    /// Drops any gesture in progress without committing it.
    pub fn reset(&mut self) {
        self.gesture = GestureState::Idle;
        self.last_pointer = None;
    }

    pub fn handle(&mut self, session: &mut MapSession, event: &InputEvent) -> EventImpact {
        tracing::trace!("Input event: {} ({:?})", event.kind(), event);

        match event {
            InputEvent::PointerDown { buttons, position } => {
                self.on_pointer_down(session, *buttons, *position)
            }
            InputEvent::PointerMove { position } => self.on_pointer_move(session, *position),
            InputEvent::PointerUp => self.on_pointer_up(session),
            InputEvent::PointerCancel => self.on_pointer_cancel(session),
            InputEvent::Wheel { delta_y, cursor } => {
                EventImpact::from_change(session.zoom_at_cursor(*cursor, *delta_y)).consume()
            }
            InputEvent::KeyDown { code } => self.on_key_down(session, code),
        }
    }

    fn on_pointer_down(
        &mut self,
        session: &mut MapSession,
        buttons: PointerButtons,
        position: PixelPoint,
    ) -> EventImpact {
        if !position.is_finite() {
            tracing::debug!("Ignoring pointer down at non-finite position");
            return EventImpact::none();
        }
        if buttons != PointerButtons::PRIMARY {
            tracing::trace!("Ignoring pointer down with buttons {:?}", buttons);
            return EventImpact::none();
        }
        if !self.gesture.is_idle() {
            tracing::debug!("Ignoring pointer down during {}", self.gesture.name());
            return EventImpact::none();
        }

        self.last_pointer = Some(position);

        let grabbed = session
            .sprite_at(position, self.config.sprite_hit_slop)
            .and_then(|id| session.begin_sprite_drag(id).map(|at| (id, at)));
        if let Some((sprite, at)) = grabbed {
            self.transition(GestureState::DraggingSprite {
                sprite,
                offset: position - at,
            });
            return EventImpact::redraw();
        }

        self.transition(GestureState::PendingClick {
            down_point: position,
            drag_offset: session.viewport().drag_offset(position),
        });
        EventImpact::none()
    }

    fn on_pointer_move(&mut self, session: &mut MapSession, position: PixelPoint) -> EventImpact {
        if !position.is_finite() {
            return EventImpact::none();
        }
        self.last_pointer = Some(position);

        match self.gesture {
            GestureState::Idle => EventImpact::none(),
            GestureState::PendingClick {
                down_point,
                drag_offset,
            } => {
                if down_point.distance(position) < self.config.drag_threshold {
                    return EventImpact::none();
                }
                self.transition(GestureState::Panning { drag_offset });
                EventImpact::from_change(session.pan_to(position, drag_offset))
            }
            GestureState::Panning { drag_offset } => {
                EventImpact::from_change(session.pan_to(position, drag_offset))
            }
            GestureState::DraggingSprite { sprite, offset } => {
                EventImpact::from_change(session.drag_sprite(sprite, position - offset))
            }
        }
    }

    fn on_pointer_up(&mut self, session: &mut MapSession) -> EventImpact {
        let gesture = self.take_gesture();
        match gesture {
            GestureState::Idle => EventImpact::none(),
            GestureState::PendingClick { down_point, .. } => {
                let point = self.last_pointer.unwrap_or(down_point);
                let hex = pixel_to_hex(point, session.viewport());
                let selected = session.toggle_hex(hex);
                tracing::debug!("Click at {:?} toggled hex {} (selected={})", point, hex, selected);
                EventImpact::redraw()
            }
            GestureState::Panning { .. } => EventImpact::none(),
            GestureState::DraggingSprite { sprite, .. } => match session.end_sprite_drag(sprite) {
                Some(anchor) => {
                    tracing::debug!("Sprite {} dropped on hex {}", sprite, anchor);
                    EventImpact::redraw()
                }
                None => EventImpact::none(),
            },
        }
    }

    fn on_pointer_cancel(&mut self, session: &mut MapSession) -> EventImpact {
        match self.take_gesture() {
            GestureState::DraggingSprite { sprite, .. } => {
                EventImpact::from_change(session.cancel_sprite_drag(sprite))
            }
            _ => EventImpact::none(),
        }
    }

    fn on_key_down(&mut self, session: &mut MapSession, code: &KeyCode) -> EventImpact {
        let step = self.config.key_pan_step;
        let (dx, dy) = match code {
            KeyCode::ArrowLeft => (-step, 0.0),
            KeyCode::ArrowRight => (step, 0.0),
            KeyCode::ArrowUp => (0.0, -step),
            KeyCode::ArrowDown => (0.0, step),
            KeyCode::Other(_) => return EventImpact::none(),
        };
        EventImpact::from_change(session.pan_by(dx, dy)).consume()
    }

    fn take_gesture(&mut self) -> GestureState {
        let gesture = mem::take(&mut self.gesture);
        if !gesture.is_idle() {
            tracing::debug!("Gesture {} -> idle", gesture.name());
        }
        gesture
    }

    fn transition(&mut self, next: GestureState) {
        tracing::debug!("Gesture {} -> {}", self.gesture.name(), next.name());
        self.gesture = next;
    }
}
