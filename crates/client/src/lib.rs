//! Top-level client orchestrating the map host and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ MapHost (Viewport, selection, sprites, gestures, redraw scheduling)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The host knows nothing about terminals or windows. The frontend owns the
//! input source and drawing surface and drives the host while it runs.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::MapHost;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles the host and the frontend
/// 2. `Client::run()` transfers control to the frontend (blocking)
/// 3. On frontend exit the host is stopped, even if the frontend failed
pub struct Client {
    host: MapHost,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn host(&self) -> &MapHost {
        &self.host
    }

    /// Run the frontend until the user quits, then stop the host.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, if any.
    pub async fn run(mut self) -> Result<MapHost> {
        let result = self.frontend.run(&mut self.host).await;

        if self.host.is_running() {
            tracing::debug!("Frontend left the host running; stopping it");
            self.host.stop();
        }

        result.map(|()| self.host)
    }
}
