//! Page Storage
//!
//! `window.localStorage` behind the core `KeyValueStore` port. When the
//! browser refuses local storage (disabled, sandboxed iframe) the page still
//! works, backed by memory for the session.

use log::warn;
use todo_core::{JsonStorage, KeyValueStore, MemoryStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// Storage the to-do list lives in for this page
pub enum PageStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

pub type PageTodoStorage = JsonStorage<PageStore>;

impl PageStore {
    /// Open `window.localStorage`, falling back to memory
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => PageStore::Local(storage),
            Err(err) => {
                warn!("[STORAGE] {}, todos will not survive a reload", err);
                PageStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage() -> StorageResult<web_sys::Storage> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(describe(e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for PageStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            PageStore::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Backend(describe(e))),
            PageStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            PageStore::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(describe(e))),
            PageStore::Memory(store) => store.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        match self {
            PageStore::Local(storage) => storage
                .remove_item(key)
                .map_err(|e| StorageError::Backend(describe(e))),
            PageStore::Memory(store) => store.remove_item(key),
        }
    }
}
