//! Event loop orchestrating user input and rendering.
//!
//! Each tick drains pending terminal events, applies them to the map host,
//! refreshes the header status and lets the host's scheduler decide whether
//! a frame is drawn.
use std::time::Instant;

use anyhow::Result;
use client_frontend_core::MapHost;
use crossterm::event as term_event;
use map_core::SurfaceSize;
use ratatui::{backend::Backend, layout::Rect};
use tokio::time::{self, Duration};

use crate::{
    input::{CellMapper, CliCommand, InputHandler},
    presentation::{CanvasSurface, ui::ScreenLayout},
};

const MAX_FRAME_INTERVAL_MS: u64 = 16;
const MAX_EVENTS_PER_TICK: usize = 256;

pub struct EventLoop {
    input: InputHandler,
    mapper: CellMapper,
}

impl EventLoop {
    pub fn new(mapper: CellMapper, map_area: Rect) -> Self {
        Self {
            input: InputHandler::new(mapper, map_area),
            mapper,
        }
    }

    pub async fn run<B: Backend>(
        mut self,
        host: &mut MapHost,
        surface: &mut CanvasSurface<B>,
    ) -> Result<()> {
        let redraw = host.config().redraw;
        let period = redraw
            .frame_interval()
            .min(redraw.min_redraw_interval())
            .min(Duration::from_millis(MAX_FRAME_INTERVAL_MS));
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.handle_input_tick(host)? {
                break;
            }

            surface.set_status(status_line(host));
            host.tick(Instant::now(), surface)?;
        }

        Ok(())
    }

    /// Drains pending terminal events. Returns `true` when the user quits.
    fn handle_input_tick(&mut self, host: &mut MapHost) -> Result<bool> {
        for _ in 0..MAX_EVENTS_PER_TICK {
            if !term_event::poll(Duration::ZERO)? {
                break;
            }
            let command = self.input.handle_event(&term_event::read()?);
            if self.apply(host, command) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Applies one command to the host. Returns `true` on quit.
    pub(crate) fn apply(&mut self, host: &mut MapHost, command: CliCommand) -> bool {
        match command {
            CliCommand::Map(event) => {
                host.handle_event(&event);
            }
            CliCommand::ZoomIn => {
                host.zoom_in();
            }
            CliCommand::ZoomOut => {
                host.zoom_out();
            }
            CliCommand::ClearSelection => {
                host.clear_selection();
            }
            CliCommand::Recenter => {
                host.recenter();
            }
            CliCommand::Resize(columns, rows) => self.resize(host, columns, rows),
            CliCommand::Quit => {
                tracing::info!("Quit requested");
                return true;
            }
            CliCommand::None => {}
        }
        false
    }

    fn resize(&mut self, host: &mut MapHost, columns: u16, rows: u16) {
        let layout = ScreenLayout::new(Rect::new(0, 0, columns, rows));
        self.input.set_map_area(layout.map);

        let (width, height) = self.mapper.area_to_pixels(layout.map);
        match SurfaceSize::new(width, height) {
            Ok(surface) => {
                tracing::debug!("Terminal resized to {}x{} cells", columns, rows);
                host.resize(surface);
            }
            Err(e) => tracing::warn!("Ignoring resize to {}x{}: {}", columns, rows, e),
        }
    }
}

/// Header text summarizing the viewport.
pub fn status_line(host: &MapHost) -> String {
    let Some(viewport) = host.current_viewport() else {
        return "stopped".to_string();
    };
    let origin = viewport.origin();
    format!(
        "radius {}  origin ({:.0}, {:.0})  selected {}  {}",
        viewport.hex_radius(),
        origin.x,
        origin.y,
        host.current_selection().len(),
        host.gesture().name()
    )
}
