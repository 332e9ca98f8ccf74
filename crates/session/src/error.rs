//! Session operation errors.

use shopmate_kv::StorageError;
use thiserror::Error;

/// Error returned by session store operations.
///
/// Errors propagate to the caller as-is; the store performs no retries and
/// never swallows a failure.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required signup field was empty.
    #[error("validation failed: {0} is required")]
    Validation(&'static str),

    /// Login was attempted with no registered account.
    #[error("no registered account; sign up first")]
    NoAccount,

    /// Email or password did not match the registered account.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// The underlying key-value store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A persisted record could not be decoded (corrupt or written by an
    /// incompatible version).
    #[error("persisted user record is invalid: {0}")]
    InvalidRecord(String),
}
