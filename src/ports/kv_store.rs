//! Durable key-value store port.

use thiserror::Error;

/// Failure raised by a [`KeyValueStore`] or by (de)serializing a stored value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("storage I/O failed for key {key:?}: {source}")]
    Io {
        /// Key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A stored value exists but cannot be decoded.
    #[error("stored value for key {key:?} is malformed: {source}")]
    Corrupt {
        /// Key holding the malformed value.
        key: String,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// An in-memory value could not be encoded for storage.
    #[error("failed to encode value for key {key:?}: {source}")]
    Encode {
        /// Key being written.
        key: String,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The key contains characters the backing medium cannot represent.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
}

/// Small string-valued store that survives process restarts.
///
/// Mirrors the capability of browser local storage: get, set and remove by
/// key. Values are opaque strings; callers own the encoding.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
