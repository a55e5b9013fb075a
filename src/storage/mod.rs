//! Durable key-value storage abstraction.
//!
//! The stores (favorites, theme) depend on [`KeyValueStorage`] rather than a
//! concrete medium, so the presentation shell can inject whatever the
//! platform provides and tests can inject doubles. Two keys are in use, one
//! per store, in independent namespaces:
//!
//! - [`FAVORITES_KEY`] — the serialized favorites snapshot (JSON array)
//! - [`THEME_KEY`] — the theme token (`"dark"` or `"light"`)
//!
//! Backends store opaque strings; serialization is the stores' concern.

mod file;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key under which the favorites snapshot is persisted.
pub const FAVORITES_KEY: &str = "card_favorites";

/// Key under which the theme preference is persisted.
pub const THEME_KEY: &str = "app_theme";

/// Errors from the durable storage layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O failed for key \"{key}\": {message}")]
    Io { key: String, message: String },

    /// A value could not be encoded for storage.
    #[error("could not encode value for key \"{key}\": {message}")]
    Serialization { key: String, message: String },

    /// The backend is not usable at all (e.g. no data directory).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub(crate) fn io(key: &str, err: impl std::fmt::Display) -> Self {
        StorageError::Io {
            key: key.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn serialization(key: &str, err: impl std::fmt::Display) -> Self {
        StorageError::Serialization {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// Asynchronous durable key-value capability.
///
/// `get` of a never-written key returns `Ok(None)`; `remove` of a missing
/// key is a no-op. Implementations must not interpret the stored value.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key` if present.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
