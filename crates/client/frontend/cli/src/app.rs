//! Glue code tying the map host and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;
use ratatui::layout::Rect;

use client_frontend_core::{Frontend, MapHost};
use map_core::SurfaceSize;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::input::CellMapper;
use crate::presentation::{CanvasSurface, terminal, ui::ScreenLayout};

/// Terminal frontend drawing the map with braille and driving it by mouse.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, host: &mut MapHost) -> Result<()> {
        tracing::info!("CLI client starting...");

        let terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let size = terminal.size()?;
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height));
        let mapper = CellMapper::new(&self.config.ui);
        let (width, height) = mapper.area_to_pixels(layout.map);
        host.start(SurfaceSize::new(width, height)?)?;

        let mut surface = CanvasSurface::new(terminal, mapper);
        surface.set_labels(
            host.config()
                .sprites
                .iter()
                .map(|sprite| (sprite.id, sprite.name.clone())),
        );

        let result = EventLoop::new(mapper, layout.map)
            .run(host, &mut surface)
            .await;

        host.stop();
        terminal::restore()?;
        tracing::info!("CLI client exiting");

        result
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, host: &mut MapHost) -> Result<()> {
        self.execute(host).await
    }
}
