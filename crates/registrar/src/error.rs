//! Error types for registrar.
//!
//! User-input problems live in [`crate::validation::ValidationError`]; this
//! enum wraps them together with record store, configuration and I/O failures.

use std::path::PathBuf;
use thiserror::Error;

use crate::validation::ValidationError;

/// Everything that can go wrong while registering or listing students.
#[derive(Error, Debug)]
pub enum Error {
    /// The record store file could not be opened or created.
    #[error("cannot open record store {path}: {source}")]
    DatabaseOpen {
        /// Location of the store.
        path: PathBuf,
        /// Cause reported by `SQLite`.
        #[source]
        source: rusqlite::Error,
    },

    /// A read or write against the record store failed.
    #[error("record store query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// The store's schema version is unreadable or unsupported.
    #[error("record store schema: {message}")]
    DatabaseMigration {
        /// What was found.
        message: String,
    },

    /// Configuration sources could not be read or merged.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// A configuration value is unusable.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Which value and why.
        message: String,
    },

    /// A submitted registration was rejected.
    #[error("registration rejected: {0}")]
    Validation(#[from] ValidationError),

    /// Writing a rendered page or reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The directory holding the record store could not be created.
    #[error("cannot create directory {path}: {source}")]
    DirectoryCreate {
        /// Directory that was requested.
        path: PathBuf,
        /// Cause reported by the OS.
        #[source]
        source: std::io::Error,
    },

    /// Records could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Whether this is a rejected registration rather than a system failure.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The message the user was shown for a rejected registration.
    #[must_use]
    pub fn validation_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.message()),
            _ => None,
        }
    }
}
