//! Storage Layer
//!
//! Persistence ports and their backends.
//! - traits: the `TodoStorage` and `KeyValueStore` ports
//! - json: JSON array under a fixed key, over any key-value store
//! - memory: in-memory key-value store

mod json;
mod memory;
mod traits;

pub use json::{decode_items, encode_items, JsonStorage};
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, TodoStorage};
