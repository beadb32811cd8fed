//! Encoding of board state in the key-value store.
//!
//! Keys and value shapes match what earlier releases wrote, so saved data
//! keeps loading: `tasks_v2` holds a JSON array of tasks, `studymate_name`
//! holds the bare name string.

use crate::ports::kv_store::{KeyValueStore, StoreError};

use super::model::{Task, ViewPrefs};

/// Key holding the JSON task list.
pub const TASKS_KEY: &str = "tasks_v2";
/// Key holding the greeting name as plain text.
pub const NAME_KEY: &str = "studymate_name";
/// Key holding the JSON filter/sort settings.
pub const VIEW_KEY: &str = "studymate_view";

/// Reads the saved task list. A missing key is an empty list.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] if the stored value is not a task list,
/// or the store's own error if it cannot be read.
pub fn load_tasks(store: &dyn KeyValueStore) -> Result<Vec<Task>, StoreError> {
    match store.get(TASKS_KEY)? {
        None => Ok(Vec::new()),
        Some(raw) => decode_tasks(&raw).map_err(|source| StoreError::Corrupt {
            key: TASKS_KEY.to_string(),
            source,
        }),
    }
}

/// Writes the whole task list.
///
/// # Errors
///
/// Returns an error if encoding or the store write fails.
pub fn save_tasks(store: &dyn KeyValueStore, tasks: &[Task]) -> Result<(), StoreError> {
    let encoded = encode_tasks(tasks).map_err(|source| StoreError::Encode {
        key: TASKS_KEY.to_string(),
        source,
    })?;
    store.set(TASKS_KEY, &encoded)
}

/// Reads the greeting name. A missing key is an empty name.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_name(store: &dyn KeyValueStore) -> Result<String, StoreError> {
    Ok(store.get(NAME_KEY)?.unwrap_or_default())
}

/// Writes the greeting name.
///
/// # Errors
///
/// Returns an error if the store write fails.
pub fn save_name(store: &dyn KeyValueStore, name: &str) -> Result<(), StoreError> {
    store.set(NAME_KEY, name)
}

/// Reads the filter and sort settings. A missing key is the default view.
///
/// # Errors
///
/// Returns [`StoreError::Corrupt`] for an undecodable value, or the store's
/// own error if it cannot be read.
pub fn load_view(store: &dyn KeyValueStore) -> Result<ViewPrefs, StoreError> {
    match store.get(VIEW_KEY)? {
        None => Ok(ViewPrefs::default()),
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: VIEW_KEY.to_string(),
            source,
        }),
    }
}

/// Writes the filter and sort settings.
///
/// # Errors
///
/// Returns an error if encoding or the store write fails.
pub fn save_view(store: &dyn KeyValueStore, view: ViewPrefs) -> Result<(), StoreError> {
    let encoded = serde_json::to_string(&view).map_err(|source| StoreError::Encode {
        key: VIEW_KEY.to_string(),
        source,
    })?;
    store.set(VIEW_KEY, &encoded)
}

/// Serializes a task list to its stored JSON form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parses a stored task list.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array of tasks.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(raw)
}
