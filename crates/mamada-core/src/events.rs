use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::model::Side;
use crate::timer::TimerState;

/// Every timer state change produces an Event.
/// The CLI prints them; the tracker turns `TimerStopped` into a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        side: Side,
        at: DateTime<Local>,
    },
    TimerPaused {
        elapsed_secs: u64,
        at: DateTime<Local>,
    },
    TimerResumed {
        elapsed_secs: u64,
        at: DateTime<Local>,
    },
    TimerTicked {
        elapsed_secs: u64,
    },
    /// The timer went back to Idle.
    TimerStopped {
        side: Side,
        elapsed_secs: u64,
        started_at: Option<DateTime<Local>>,
        at: DateTime<Local>,
    },
    StateSnapshot {
        state: TimerState,
        side: Option<Side>,
        elapsed_secs: u64,
        at: DateTime<Local>,
    },
}
