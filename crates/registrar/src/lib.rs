//! `registrar` - A student chapter registration desk
//!
//! This library validates student registrations, appends them to a single
//! JSON entry in a local key-value store, and renders the stored records as
//! a table.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod ids;
pub mod logging;
pub mod record;
pub mod repository;
pub mod storage;
pub mod validation;
pub mod view;

pub use config::Config;
pub use controller::{Notifier, Registrar};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{FormState, StudentRecord};
pub use repository::{RecordRepository, StoreRepository};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
