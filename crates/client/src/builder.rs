//! Client builder with dependency injection pattern.

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use client_frontend_core::{FrontendConfig, MapHost, MapStyle};

/// Builder for constructing a Client with proper validation.
///
/// The frontend is required. The host is built from `config` and `style`
/// unless one is injected directly.
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<FrontendConfig>,
    style: Option<MapStyle>,
    host: Option<MapHost>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map, interaction and redraw settings (default: `FrontendConfig::default()`).
    pub fn config(mut self, config: FrontendConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Colors handed to the redraw pass (default: `MapStyle::default()`).
    pub fn style(mut self, style: MapStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Use an already constructed host; `config` and `style` are ignored.
    pub fn host(mut self, host: MapHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the frontend (required).
    ///
    /// The frontend supplies input events and the drawing surface, and
    /// starts the host with its surface size.
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend is not set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let host = self.host.unwrap_or_else(|| {
            MapHost::new(
                self.config.unwrap_or_default(),
                self.style.unwrap_or_default(),
            )
        });

        Ok(Client { host, frontend })
    }
}
