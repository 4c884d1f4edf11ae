//! Domain Layer - Errors
//!
//! Every fallible operation on the to-do list returns a [`TodoResult`].

use thiserror::Error;

/// Common result type for to-do operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Result type for storage backends
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the to-do manager
#[derive(Debug, Error)]
pub enum TodoError {
    /// Submitted text was empty after trimming
    #[error("todo text must not be empty")]
    EmptyText,
    /// Position does not exist in the current list
    #[error("index {index} out of range for list of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    /// The persistence port failed; the operation was not applied
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl TodoError {
    /// Errors the user caused and should be told about directly.
    /// Everything else is logged.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, TodoError::EmptyText)
    }
}

/// Errors raised by a [`crate::storage::TodoStorage`] backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend cannot be reached at all (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Backend rejected the operation (quota exceeded, security error)
    #[error("storage backend failed: {0}")]
    Backend(String),
    /// Persisted value under `key` is not a JSON array of strings
    #[error("corrupt value under key {key:?}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode todo list: {0}")]
    Encode(#[source] serde_json::Error),
}
