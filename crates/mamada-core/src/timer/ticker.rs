//! Repeating 1 Hz tick source.
//!
//! A `Ticker` exists exactly while a feeding is in progress: the owner
//! spawns one when the engine leaves Idle and cancels it when the engine
//! returns to Idle. Dropping a ticker cancels it as well, so a stopped
//! feeding never leaves a task firing in the background.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// One elapsed period. `seq` starts at 1 for each ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub seq: u64,
}

/// Handle to a spawned tick task.
#[derive(Debug)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Tick period used for feedings.
    pub const PERIOD: Duration = Duration::from_secs(1);

    /// Spawn a task sending a [`Tick`] every `period`, the first one a full
    /// period after spawning. The task ends on its own once `tx` is closed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration, tx: UnboundedSender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut seq = 0;
            loop {
                interval.tick().await;
                seq += 1;
                if tx.send(Tick { seq }).is_err() {
                    break;
                }
            }
        });
        tracing::trace!(?period, "ticker spawned");
        Self {
            handle: Some(handle),
        }
    }

    /// Stop delivering ticks.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::trace!("ticker cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
