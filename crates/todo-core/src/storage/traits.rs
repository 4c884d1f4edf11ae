//! Storage Layer - Core Traits
//!
//! Defines the persistence ports the manager talks to.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::StorageResult;

/// Persistence port for the whole to-do list
///
/// The list is always read and written as a unit; there are no partial writes.
pub trait TodoStorage {
    /// Load the persisted list. `None` means nothing was ever saved
    /// (or it was cleared), which callers treat as an empty list.
    fn read(&self) -> StorageResult<Option<Vec<String>>>;

    /// Overwrite the persisted list
    fn write(&mut self, items: &[String]) -> StorageResult<()>;

    /// Remove the persisted entry entirely
    fn clear(&mut self) -> StorageResult<()>;
}

/// Origin-scoped string key-value store (the shape of `window.localStorage`)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}
