//! Core error types for mamada-core.
//!
//! Validation errors block the action that raised them. Persistence read
//! errors are recovered by the stores (empty defaults); write errors are
//! handed back to the caller so they can be surfaced as warnings.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for mamada-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Local storage errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A profile name is empty after trimming.
    #[error("Incomplete profile: missing {}", .missing.join(" and "))]
    IncompleteProfile { missing: Vec<&'static str> },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Local key-value storage errors.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to open the backing store
    #[error("Failed to open storage at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Stored payload could not be read
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Payload could not be written
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// Storage capacity exhausted
    #[error("Storage quota exceeded writing '{key}' ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl PersistenceError {
    pub(crate) fn read(key: &str, err: impl std::fmt::Display) -> Self {
        PersistenceError::Read {
            key: key.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write(key: &str, err: impl std::fmt::Display) -> Self {
        PersistenceError::Write {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
