//! The tracker facade.
//!
//! Owns the profile, the session log, the timer engine and the view
//! controller, and turns a stopped timer into a recorded session.

use chrono::{DateTime, Local, NaiveDate, Timelike};

use crate::error::{CoreError, PersistenceError};
use crate::events::Event;
use crate::model::{Profile, Session, SessionCollection, Side};
use crate::report::{format_report, ReportLabels};
use crate::share::{share_link, ShareSink, ShareTarget};
use crate::storage::{KeyValueStore, ProfileStore, SessionStore};
use crate::timer::TimerEngine;
use crate::view::{View, ViewController};

/// Result of stopping the timer.
#[derive(Debug, Default)]
pub struct StopOutcome {
    /// `TimerStopped`, or `None` if the timer was idle.
    pub stopped: Option<Event>,
    /// Session appended to the log, if any time had elapsed.
    pub recorded: Option<Session>,
    /// Set when the session could not be persisted. It is still kept in
    /// memory for the rest of the process.
    pub warning: Option<PersistenceError>,
}

pub struct Tracker<S> {
    profiles: ProfileStore<S>,
    sessions: SessionStore<S>,
    profile: Profile,
    engine: TimerEngine,
    views: ViewController,
}

impl<S: KeyValueStore + Clone> Tracker<S> {
    /// Load profile and sessions from `kv` and pick the initial view.
    pub fn open(kv: S) -> Self {
        let profiles = ProfileStore::new(kv.clone());
        let sessions = SessionStore::open(kv);
        let profile = profiles.load();
        let views = ViewController::on_startup(&profile);
        tracing::debug!(view = %views.current(), sessions = sessions.sessions().len(), "tracker opened");
        Self {
            profiles,
            sessions,
            profile,
            engine: TimerEngine::new(),
            views,
        }
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn sessions(&self) -> &SessionCollection {
        self.sessions.sessions()
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn view(&self) -> View {
        self.views.current()
    }

    /// Validate and persist `profile`, then move to Home.
    ///
    /// # Errors
    /// Incomplete profiles and storage failures. The current profile and
    /// view are unchanged on error.
    pub fn save_profile(&mut self, profile: &Profile) -> Result<&Profile, CoreError> {
        self.profile = self.profiles.save(profile)?;
        self.views.profile_saved();
        Ok(&self.profile)
    }

    pub fn navigate(&mut self, target: View) -> bool {
        self.views.navigate(target, &self.profile)
    }

    /// Start a feeding. Ignored without a complete profile.
    pub fn start(&mut self, side: Side) -> Option<Event> {
        if !self.profile.is_complete() {
            tracing::debug!("start ignored: profile incomplete");
            return None;
        }
        self.engine.start(side)
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.engine.tick()
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.engine.resume()
    }

    pub fn toggle_pause(&mut self) -> Option<Event> {
        self.engine.toggle_pause()
    }

    /// Stop the timer, recording a session stamped with the stop instant.
    pub fn stop(&mut self) -> StopOutcome {
        match self.engine.stop() {
            Some(
                stopped @ Event::TimerStopped {
                    side,
                    elapsed_secs,
                    at,
                    ..
                },
            ) => self.record(stopped, side, elapsed_secs, at),
            other => StopOutcome {
                stopped: other,
                ..StopOutcome::default()
            },
        }
    }

    /// Stop the timer, stamping the session with `now`.
    pub fn stop_at(&mut self, now: DateTime<Local>) -> StopOutcome {
        match self.engine.stop() {
            Some(
                stopped @ Event::TimerStopped {
                    side, elapsed_secs, ..
                },
            ) => self.record(stopped, side, elapsed_secs, now),
            other => StopOutcome {
                stopped: other,
                ..StopOutcome::default()
            },
        }
    }

    fn record(
        &mut self,
        stopped: Event,
        side: Side,
        elapsed_secs: u64,
        now: DateTime<Local>,
    ) -> StopOutcome {
        if elapsed_secs == 0 {
            tracing::debug!("nothing elapsed, no session recorded");
            return StopOutcome {
                stopped: Some(stopped),
                ..StopOutcome::default()
            };
        }

        let session = Session {
            id: self.sessions.next_id(now.timestamp_millis()),
            date: now.date_naive(),
            time: now.time().with_nanosecond(0).unwrap_or_else(|| now.time()),
            side,
            duration_secs: elapsed_secs,
            mother_name: self.profile.mother_name.clone(),
            baby_name: self.profile.baby_name.clone(),
        };

        let warning = match self.sessions.append(session.clone()) {
            Ok(_) => {
                tracing::info!(id = session.id, %side, duration = elapsed_secs, "session recorded");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "session kept in memory only");
                Some(e)
            }
        };

        StopOutcome {
            stopped: Some(stopped),
            recorded: Some(session),
            warning,
        }
    }

    /// Sessions recorded on `date`, newest first.
    pub fn today_sessions(&self, date: NaiveDate) -> SessionCollection {
        SessionStore::<S>::today(self.sessions.sessions(), date)
    }

    /// Report for `date`.
    pub fn report(&self, date: NaiveDate, labels: &ReportLabels) -> String {
        format_report(&self.profile, &self.today_sessions(date), date, labels)
    }

    /// Hand the report for `date` to `sink`, returning the link used.
    pub fn share_report(
        &self,
        date: NaiveDate,
        labels: &ReportLabels,
        target: ShareTarget,
        sink: &dyn ShareSink,
    ) -> String {
        let report = self.report(date, labels);
        let link = share_link(target, &report, &labels.subject(date));
        sink.share(target, &link);
        link
    }
}
