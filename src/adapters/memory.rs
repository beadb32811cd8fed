//! Process-local adapters with no external side effects.
//!
//! Used by tests and by hosts that want a throwaway session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::kv_store::{KeyValueStore, StoreError};
use crate::ports::notifier::{Notifier, NotifyError};
use crate::ports::quotes::{FetchError, QuoteFuture, QuoteSource};
use crate::ports::search::{SearchFuture, SearchSource};
use crate::ports::IdGenerator;

/// Key-value store held in a `HashMap`.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().expect("memory store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().expect("memory store lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

/// Produces `task-1`, `task-2`, ... in order.
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator starting at `task-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("task-{n}")
    }
}

/// Notifier that plays nothing and counts how often it was asked to.
#[derive(Default)]
pub struct SilentNotifier {
    calls: AtomicUsize,
}

impl SilentNotifier {
    /// Creates a silent notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cues requested so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Notifier for SilentNotifier {
    fn notify(&self) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Quote and search source for a host with no network; every request fails.
pub struct OfflineService;

fn offline_error() -> FetchError {
    FetchError::Transport {
        url: "offline://".into(),
        message: "network disabled".into(),
    }
}

impl QuoteSource for OfflineService {
    fn random_quote(&self) -> QuoteFuture<'_> {
        Box::pin(async { Err(offline_error()) })
    }
}

impl SearchSource for OfflineService {
    fn related_topics(&self, _query: &str) -> SearchFuture<'_> {
        Box::pin(async { Err(offline_error()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::with_entries([("studymate_name", "Ada")]);
        assert_eq!(store.get("studymate_name").unwrap().as_deref(), Some("Ada"));

        store.set("tasks_v2", "[]").unwrap();
        store.remove("studymate_name").unwrap();

        assert!(store.get("studymate_name").unwrap().is_none());
        assert_eq!(store.get("tasks_v2").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.generate_id(), "task-1");
        assert_eq!(ids.generate_id(), "task-2");
    }

    #[test]
    fn silent_notifier_counts_calls() {
        let notifier = SilentNotifier::new();
        notifier.notify().unwrap();
        notifier.notify().unwrap();
        assert_eq!(notifier.calls(), 2);
    }

    #[tokio::test]
    async fn offline_service_always_fails() {
        assert!(OfflineService.random_quote().await.is_err());
        assert!(OfflineService.related_topics("rust").await.is_err());
    }
}
