//! View State Store
//!
//! Mirror of the manager's state for rendering, with field-level reactivity
//! from reactive_stores. Only the manager writes it, through `store_apply`.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{EditSession, TodoEvent, TodoState};

/// What the components render from
#[derive(Clone, Debug, Default, Store)]
pub struct TodoViewState {
    /// Full list in insertion order
    pub items: Vec<String>,
    /// Text in the add input
    pub pending: String,
    pub search: String,
    pub editing: Option<EditSession>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoViewState>;

/// Get the view store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Copy the fields `event` changed from the manager into the store
pub fn store_apply(store: &TodoStore, event: &TodoEvent, state: &TodoState) {
    match event {
        TodoEvent::PendingChanged => {
            *store.pending().write() = state.pending().to_string();
        }
        TodoEvent::SearchChanged => {
            *store.search().write() = state.search().to_string();
        }
        TodoEvent::EditStarted { .. } | TodoEvent::DraftChanged | TodoEvent::EditCancelled => {
            *store.editing().write() = state.editing().cloned();
        }
        TodoEvent::ItemAdded { .. } => {
            *store.items().write() = state.items().to_vec();
            *store.pending().write() = state.pending().to_string();
        }
        TodoEvent::Hydrated { .. }
        | TodoEvent::ItemDeleted { .. }
        | TodoEvent::Cleared
        | TodoEvent::EditCommitted { .. } => {
            *store.items().write() = state.items().to_vec();
            *store.editing().write() = state.editing().cloned();
        }
    }
}
