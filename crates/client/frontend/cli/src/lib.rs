//! Terminal UI frontend for the wormhole hex map.
//!
//! This crate provides a terminal-based user interface for the map.
//! It implements the `client_frontend_core::Frontend` trait: mouse and key
//! input is translated into map input events, and the host's frames are
//! drawn onto a braille canvas.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use input::{CellMapper, CliCommand};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
