//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (durable storage, IDs, audio, quote and search services).
//! Implementations live in `src/adapters/`.

pub mod id_gen;
pub mod kv_store;
pub mod notifier;
pub mod quotes;
pub mod search;

pub use id_gen::IdGenerator;
pub use kv_store::{KeyValueStore, StoreError};
pub use notifier::{Notifier, NotifyError};
pub use quotes::{FetchError, Quote, QuoteFuture, QuoteSource};
pub use search::{RelatedTopic, SearchFuture, SearchSource};
