//! Event handling for CLI client.
//!
//! The event loop drains terminal input, forwards it to the map host and
//! ticks the host's scheduler against the canvas surface.

mod r#loop;

pub use r#loop::EventLoop;
