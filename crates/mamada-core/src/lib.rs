//! # Mamada Core Library
//!
//! Core logic for the Mamada Tracker breastfeeding log: a caregiver sets up
//! a profile, times each feeding on the left or right side, and exports a
//! daily summary through a messaging or email link. The `mamada-cli`
//! binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: tick-driven state machine (Idle, Running, Paused);
//!   the owner calls `tick()` once per second from a [`Ticker`]
//! - **Storage**: profile and session records in a local key-value store
//!   (SQLite or in-memory), TOML configuration
//! - **Report**: plain-text daily summary and share links
//! - **View**: screen gating on profile completeness
//!
//! ## Key Components
//!
//! - [`Tracker`]: facade tying the pieces together
//! - [`TimerEngine`]: feeding timer
//! - [`SessionStore`] / [`ProfileStore`]: persistence
//! - [`format_report`]: report text

pub mod error;
pub mod events;
pub mod model;
pub mod report;
pub mod share;
pub mod storage;
pub mod timer;
pub mod tracker;
pub mod view;

pub use error::{ConfigError, CoreError, PersistenceError, ValidationError};
pub use events::Event;
pub use model::{display_date, parse_date, Profile, Session, SessionCollection, Side};
pub use report::{format_duration, format_report, Language, ReportLabels};
pub use share::{share_link, BrowserSink, RecordingSink, ShareSink, ShareTarget};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, ProfileStore, SessionStore};
pub use timer::{Tick, Ticker, TimerEngine, TimerState};
pub use tracker::{StopOutcome, Tracker};
pub use view::{View, ViewController};
