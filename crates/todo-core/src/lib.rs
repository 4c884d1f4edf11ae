//! To-Do Core
//!
//! Layered architecture:
//! - domain: edit session, search filter, errors
//! - storage: persistence ports and backends
//! - manager: the to-do list state machine
//! - events: change notifications for views

pub mod config;
pub mod domain;
pub mod events;
pub mod manager;
pub mod storage;


pub use config::{TodoConfig, UiStrings, DEFAULT_STORAGE_KEY};
pub use domain::{EditSession, StorageError, StorageResult, TodoError, TodoResult, VisibleItem};
pub use events::{SubscriptionId, TodoEvent};
pub use manager::{TodoManager, TodoState};
pub use storage::{JsonStorage, KeyValueStore, MemoryStore, TodoStorage};
