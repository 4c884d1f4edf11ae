//! JSON-encoded list under a single key
//!
//! Adapts any [`KeyValueStore`] into a [`TodoStorage`]: the list is stored as
//! a JSON array of strings under one fixed key.

use log::debug;

use super::traits::{KeyValueStore, TodoStorage};
use crate::domain::{StorageError, StorageResult};

/// Encode a list as the persisted JSON array
pub fn encode_items(items: &[String]) -> StorageResult<String> {
    serde_json::to_string(items).map_err(StorageError::Encode)
}

/// Decode a persisted value back into a list
pub fn decode_items(key: &str, raw: &str) -> StorageResult<Vec<String>> {
    serde_json::from_str(raw).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })
}

/// [`TodoStorage`] over a key-value backend
#[derive(Debug, Clone)]
pub struct JsonStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying key-value backend
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> TodoStorage for JsonStorage<S> {
    fn read(&self) -> StorageResult<Option<Vec<String>>> {
        match self.store.get_item(&self.key)? {
            Some(raw) => decode_items(&self.key, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn write(&mut self, items: &[String]) -> StorageResult<()> {
        let raw = encode_items(items)?;
        debug!("[STORAGE] write {} items under {:?}", items.len(), self.key);
        self.store.set_item(&self.key, &raw)
    }

    fn clear(&mut self) -> StorageResult<()> {
        debug!("[STORAGE] remove {:?}", self.key);
        self.store.remove_item(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_absent_key_reads_none() {
        let storage = JsonStorage::new(MemoryStore::new(), "todos");
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_write_stores_json_array() {
        let mut storage = JsonStorage::new(MemoryStore::new(), "todos");
        storage.write(&["Buy milk".to_string(), "say \"hi\"".to_string()]).unwrap();

        let raw = storage.store().get_item("todos").unwrap().unwrap();
        assert_eq!(raw, r#"["Buy milk","say \"hi\""]"#);
        assert_eq!(
            storage.read().unwrap(),
            Some(vec!["Buy milk".to_string(), "say \"hi\"".to_string()])
        );
    }

    #[test]
    fn test_clear_removes_key() {
        let mut storage = JsonStorage::new(MemoryStore::new(), "todos");
        storage.write(&["a".to_string()]).unwrap();
        storage.clear().unwrap();
        assert!(!storage.store().contains_key("todos"));
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut store = MemoryStore::new();
        store.set_item("todos", "{not json").unwrap();
        let storage = JsonStorage::new(store, "todos");

        match storage.read() {
            Err(StorageError::Corrupt { key, .. }) => assert_eq!(key, "todos"),
            other => panic!("expected corrupt error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_string_array_is_corrupt() {
        assert!(decode_items("todos", "[1, 2]").is_err());
        assert_eq!(decode_items("todos", "[]").unwrap(), Vec::<String>::new());
    }
}
