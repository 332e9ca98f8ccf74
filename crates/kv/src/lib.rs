//! `shopmate-kv` — durable key-value persistence.
//!
//! An abstract persisted mapping from string keys to string values that
//! survives process restarts. Values are opaque to this crate; callers own
//! the serialization format. Each call is atomic with respect to itself and
//! the write discipline is last-write-wins: no transactions, no
//! read-modify-write atomicity.

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, StorageError};
