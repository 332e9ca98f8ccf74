//! Key-value storage contract.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation error.
///
/// Failures are surfaced to the caller as-is; the store performs no retries.
/// Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be opened or created.
    #[error("failed to open storage backend: {0}")]
    Open(String),

    /// A read or write against the backing store failed.
    #[error("storage I/O failed: {0}")]
    Io(String),
}

/// Durable mapping from string keys to string values.
///
/// Implementations must make each call atomic with respect to itself (no
/// partially written value is ever observable) and must persist writes
/// across process restarts. Concurrent writers race on last-write-wins;
/// serializing compound operations is the caller's responsibility.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Look up the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Removing an absent key is a
    /// no-op, not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
