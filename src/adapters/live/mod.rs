//! Live adapters for real external interactions.

pub mod id_gen;
pub mod kv_store;
pub mod notifier;
pub mod quotes;
pub mod search;
