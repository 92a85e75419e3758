//! Cross-frontend primitives for hosting the hex map.
//!
//! Houses the input model, the interaction state machine, redraw scheduling
//! and the rendering-surface interface that both the CLI and future
//! graphical clients reuse.
pub mod config;
pub mod controller;
pub mod event;
pub mod frontend;
pub mod host;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod surface;

pub use config::{FrontendConfig, InteractionConfig, RedrawConfig};
pub use controller::{GestureState, InteractionController};
pub use event::EventImpact;
pub use frontend::Frontend;
pub use host::{FrameReport, MapHost};
pub use input::{InputEvent, KeyCode, PointerButtons};
pub use render::{MapStyle, Scene, visible_hex_centers};
pub use scheduler::{FramePlan, RedrawMode, RenderScheduler};
pub use surface::{DrawCommand, RecordingSurface, Rgb, Surface};
