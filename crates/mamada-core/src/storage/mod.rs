//! Local persistence.
//!
//! Profile and sessions live as two independent JSON records in a
//! key-value store. [`Database`] is the durable SQLite-backed store;
//! [`MemoryStore`] keeps everything in process.

mod config;
pub mod database;
pub mod memory;
pub mod profile_store;
pub mod session_store;

pub use config::{Config, ReportConfig, ShareConfig};
pub use database::Database;
pub use memory::MemoryStore;
pub use profile_store::ProfileStore;
pub use session_store::SessionStore;

use std::path::PathBuf;
use std::rc::Rc;

use crate::error::PersistenceError;

/// Key of the profile record.
pub const PROFILE_KEY: &str = "mamada-profile";
/// Key of the session collection record.
pub const SESSIONS_KEY: &str = "mamada-sessions";

/// String key-value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// Returns the data directory, creating it if needed.
///
/// `MAMADA_DATA_DIR` wins when set. Otherwise `~/.config/mamada`, or
/// `~/.config/mamada-dev` when `MAMADA_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("MAMADA_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MAMADA_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("mamada-dev")
            } else {
                base_dir.join("mamada")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
