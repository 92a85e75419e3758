//! Redraw scheduling.
//!
//! The scheduler never draws. Each tick the host hands it the dirty flags
//! drained from the session and gets back a [`FramePlan`] saying whether to
//! rebuild the scene and whether to present it. Dirty state that arrives
//! while the reactive throttle is closed stays pending until the next
//! allowed tick.
use std::time::{Duration, Instant};

use map_core::DirtyFlags;

use crate::config::RedrawConfig;

/// What triggers a redraw.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RedrawMode {
    /// Rebuild and present only when something changed, rate-limited.
    Reactive,
    /// Rebuild and present every frame regardless of changes.
    FrameLoop,
    /// Rebuild on change at the throttled rate, present every frame.
    #[default]
    Both,
}

/// Work to perform for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FramePlan {
    pub rebuild: bool,
    pub present: bool,
}

impl FramePlan {
    pub const fn idle() -> Self {
        Self {
            rebuild: false,
            present: false,
        }
    }

    pub const fn full() -> Self {
        Self {
            rebuild: true,
            present: true,
        }
    }

    pub const fn is_idle(&self) -> bool {
        !self.rebuild && !self.present
    }
}

/// Fixed-rate deadline tracker.
///
/// Deadlines advance by whole intervals so a caller ticking slightly faster
/// than the rate still hits it on average. After a stall the next deadline
/// is measured from the firing time instead of bursting to catch up.
#[derive(Clone, Copy, Debug)]
struct Cadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Cadence {
    const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_none_or(|due| now >= due)
    }

    fn fire(&mut self, now: Instant) {
        let next = match self.next_due {
            Some(due) if due + self.interval > now => due + self.interval,
            _ => now + self.interval,
        };
        self.next_due = Some(next);
    }

    fn reset(&mut self) {
        self.next_due = None;
    }
}

#[derive(Clone, Debug)]
pub struct RenderScheduler {
    mode: RedrawMode,
    redraw: Cadence,
    frame: Cadence,
    pending: DirtyFlags,
    running: bool,
}

impl RenderScheduler {
    pub fn new(config: &RedrawConfig) -> Self {
        Self {
            mode: config.mode,
            redraw: Cadence::new(config.min_redraw_interval()),
            frame: Cadence::new(config.frame_interval()),
            pending: DirtyFlags::empty(),
            running: false,
        }
    }

    pub const fn mode(&self) -> RedrawMode {
        self.mode
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Dirty state accumulated but not yet redrawn.
    pub const fn pending(&self) -> DirtyFlags {
        self.pending
    }

    /// Starts scheduling. The first tick after a start always draws.
    pub fn start(&mut self) {
        self.running = true;
        self.pending = DirtyFlags::all();
        self.redraw.reset();
        self.frame.reset();
        tracing::debug!("Render scheduler started: mode={}", self.mode);
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!("Render scheduler stopped");
        }
        self.running = false;
        self.pending = DirtyFlags::empty();
    }

    /// Merges `dirty` into the pending set and decides this tick's work.
    pub fn poll(&mut self, now: Instant, dirty: DirtyFlags) -> FramePlan {
        if !self.running {
            return FramePlan::idle();
        }
        self.pending |= dirty;

        let plan = match self.mode {
            RedrawMode::Reactive => {
                let due = self.reactive_due(now);
                FramePlan {
                    rebuild: due,
                    present: due,
                }
            }
            RedrawMode::FrameLoop => {
                if self.frame.is_due(now) {
                    FramePlan::full()
                } else {
                    FramePlan::idle()
                }
            }
            RedrawMode::Both => {
                let rebuild = self.reactive_due(now);
                FramePlan {
                    rebuild,
                    present: rebuild || self.frame.is_due(now),
                }
            }
        };

        if plan.rebuild {
            self.pending = DirtyFlags::empty();
            self.redraw.fire(now);
        } else if !self.pending.is_empty() {
            tracing::trace!("Redraw deferred: pending={:?}", self.pending);
        }
        if plan.present {
            self.frame.fire(now);
        }

        plan
    }

    fn reactive_due(&self, now: Instant) -> bool {
        !self.pending.is_empty() && self.redraw.is_due(now)
    }
}
