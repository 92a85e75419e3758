//! Shell-facing entry point tying session, controller and scheduler together.
use std::time::Instant;

use anyhow::Result;
use map_core::{AxialHex, MapError, MapSession, SurfaceSize, Viewport};

use crate::config::FrontendConfig;
use crate::controller::{GestureState, InteractionController};
use crate::event::EventImpact;
use crate::input::InputEvent;
use crate::render::{MapStyle, Scene};
use crate::scheduler::RenderScheduler;
use crate::surface::Surface;

/// What a call to [`MapHost::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub rebuilt: bool,
    pub presented: bool,
    /// Commands in the scene that was presented, if any.
    pub commands: usize,
}

/// Owns one map session and drives it from shell callbacks.
///
/// All mutation happens inside [`handle_event`](Self::handle_event) and
/// [`tick`](Self::tick); between `start` and `stop` the host holds a live
/// [`MapSession`], outside of it every call is a no-op.
#[derive(Debug)]
pub struct MapHost {
    config: FrontendConfig,
    style: MapStyle,
    session: Option<MapSession>,
    controller: InteractionController,
    scheduler: RenderScheduler,
    scene: Option<Scene>,
}

impl MapHost {
    pub fn new(config: FrontendConfig, style: MapStyle) -> Self {
        let controller = InteractionController::new(config.interaction);
        let scheduler = RenderScheduler::new(&config.redraw);
        Self {
            config,
            style,
            session: None,
            controller,
            scheduler,
            scene: None,
        }
    }

    pub const fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub const fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Creates a fresh session centered on `surface` and starts the scheduler.
    pub fn start(&mut self, surface: SurfaceSize) -> Result<(), MapError> {
        if self.session.is_some() {
            tracing::info!("Restarting map session");
        }
        let session = MapSession::new(surface, self.config.map, &self.config.sprites)?;
        tracing::info!(
            "Map session started: surface={}x{}, radius={}, sprites={}",
            surface.width(),
            surface.height(),
            session.viewport().hex_radius(),
            session.sprites().len()
        );

        self.session = Some(session);
        self.controller.reset();
        self.scene = None;
        self.scheduler.start();
        Ok(())
    }

    /// Tears the session down. Safe to call when not running.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("Map session stopped");
        }
        self.controller.reset();
        self.scheduler.stop();
        self.scene = None;
    }

    pub const fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub const fn session(&self) -> Option<&MapSession> {
        self.session.as_ref()
    }

    pub fn resize(&mut self, surface: SurfaceSize) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.resize(surface))
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> EventImpact {
        match self.session.as_mut() {
            Some(session) => self.controller.handle(session, event),
            None => {
                tracing::trace!("Dropping {} while stopped", event.kind());
                EventImpact::none()
            }
        }
    }

    pub fn current_viewport(&self) -> Option<Viewport> {
        self.session.as_ref().map(|session| *session.viewport())
    }

    pub fn current_selection(&self) -> Vec<AxialHex> {
        self.session
            .as_ref()
            .map(|session| session.selection().list().to_vec())
            .unwrap_or_default()
    }

    pub fn zoom_in(&mut self) -> bool {
        self.session.as_mut().is_some_and(MapSession::zoom_in)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.session.as_mut().is_some_and(MapSession::zoom_out)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.session.as_mut().is_some_and(MapSession::clear_selection)
    }

    pub fn recenter(&mut self) -> bool {
        self.session.as_mut().is_some_and(MapSession::recenter)
    }

    pub const fn gesture(&self) -> &GestureState {
        self.controller.gesture()
    }

    /// Runs one scheduler tick: rebuilds the scene if due and presents it
    /// on `surface` if due.
    pub fn tick<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Result<FrameReport> {
        let Some(session) = self.session.as_mut() else {
            return Ok(FrameReport::default());
        };

        let plan = self.scheduler.poll(now, session.take_dirty());
        let mut report = FrameReport::default();

        if plan.rebuild {
            self.scene = Some(Scene::build(session, &self.style));
            report.rebuilt = true;
        }
        if plan.present
            && let Some(scene) = &self.scene
        {
            scene.replay(surface);
            surface.present()?;
            report.presented = true;
            report.commands = scene.len();
        }

        Ok(report)
    }
}
