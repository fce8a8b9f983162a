//! Feeding timer state machine.
//!
//! The engine has no internal thread. Elapsed time only advances through
//! `tick()`, which the owner calls once per real second while a feeding
//! is in progress (see [`Ticker`](super::Ticker)).
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused -> Idle
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.start(Side::Left);
//! // Once per second:
//! engine.tick();
//! let stopped = engine.stop(); // Some(Event::TimerStopped { .. })
//! ```

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::model::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// No feeding in progress.
    Idle,
    /// Accumulating one second per tick.
    Running,
    /// Frozen; elapsed time retained.
    Paused,
}

/// Core timer engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    state: TimerState,
    side: Option<Side>,
    elapsed_secs: u64,
    /// Wall-clock instant of `start()`, kept for display only.
    #[serde(default)]
    started_at: Option<DateTime<Local>>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    /// Create an idle engine.
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            side: None,
            elapsed_secs: 0,
            started_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Running or Paused.
    pub fn is_active(&self) -> bool {
        self.state != TimerState::Idle
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            side: self.side,
            elapsed_secs: self.elapsed_secs,
            at: Local::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, side: Side) -> Option<Event> {
        if self.state != TimerState::Idle {
            return None;
        }
        let now = Local::now();
        self.state = TimerState::Running;
        self.side = Some(side);
        self.elapsed_secs = 0;
        self.started_at = Some(now);
        tracing::debug!(%side, "timer started");
        Some(Event::TimerStarted { side, at: now })
    }

    /// Count one second. Ignored unless Running.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.elapsed_secs += 1;
        Some(Event::TimerTicked {
            elapsed_secs: self.elapsed_secs,
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.state = TimerState::Paused;
        tracing::debug!(elapsed = self.elapsed_secs, "timer paused");
        Some(Event::TimerPaused {
            elapsed_secs: self.elapsed_secs,
            at: Local::now(),
        })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        tracing::debug!(elapsed = self.elapsed_secs, "timer resumed");
        Some(Event::TimerResumed {
            elapsed_secs: self.elapsed_secs,
            at: Local::now(),
        })
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => self.pause(),
            TimerState::Paused => self.resume(),
            TimerState::Idle => None,
        }
    }

    /// End the feeding and return to Idle.
    ///
    /// The returned `TimerStopped` carries the elapsed seconds even when
    /// zero; deciding whether that makes a session is up to the caller.
    pub fn stop(&mut self) -> Option<Event> {
        if self.state == TimerState::Idle {
            return None;
        }
        let side = self.side?;
        let event = Event::TimerStopped {
            side,
            elapsed_secs: self.elapsed_secs,
            started_at: self.started_at,
            at: Local::now(),
        };
        tracing::debug!(%side, elapsed = self.elapsed_secs, "timer stopped");
        self.reset();
        Some(event)
    }

    fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.side = None;
        self.elapsed_secs = 0;
        self.started_at = None;
    }
}
