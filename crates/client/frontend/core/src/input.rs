//! Normalized input events delivered by a front-end.
//!
//! Positions are pixels in the rendering surface's frame. Front-ends are
//! responsible for translating their native events (terminal cells, DOM
//! offsets, window coordinates) into this space.
use bitflags::bitflags;
use map_core::PixelPoint;

bitflags! {
    /// Pressed pointer buttons, numbered like DOM `MouseEvent.buttons`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        const PRIMARY   = 1 << 0;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
    }
}

/// Key identifier using DOM `KeyboardEvent.code` names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::EnumString, strum::AsRefStr)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Any key the map does not react to.
    #[strum(default)]
    Other(String),
}

impl KeyCode {
    pub const fn is_arrow(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft | Self::ArrowRight | Self::ArrowUp | Self::ArrowDown
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown {
        buttons: PointerButtons,
        position: PixelPoint,
    },
    PointerMove {
        position: PixelPoint,
    },
    PointerUp,
    /// The pointer left the surface's control (focus lost, capture broken).
    PointerCancel,
    Wheel {
        delta_y: f64,
        cursor: PixelPoint,
    },
    KeyDown {
        code: KeyCode,
    },
}

impl InputEvent {
    /// Short label used in trace logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::PointerCancel => "pointer_cancel",
            Self::Wheel { .. } => "wheel",
            Self::KeyDown { .. } => "key_down",
        }
    }
}
