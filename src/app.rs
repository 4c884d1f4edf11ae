//! To-Do Frontend App
//!
//! Builds the manager, hydrates it from localStorage, and lays out the page.

use leptos::prelude::*;
use log::error;
use reactive_stores::Store;
use todo_core::{JsonStorage, TodoConfig, TodoManager};

use crate::components::{ClearAllButton, NewItemForm, SearchBar, TodoListView};
use crate::context::TodoContext;
use crate::storage::PageStore;
use crate::store::{store_apply, TodoViewState};

#[component]
pub fn App() -> impl IntoView {
    let config = TodoConfig::default();
    let title = config.ui.title.clone();

    // View store mirrors the manager
    let store = Store::new(TodoViewState::default());
    provide_context(store);

    let storage = JsonStorage::new(PageStore::open(), config.storage_key.clone());
    let mut manager = TodoManager::new(storage);
    manager.subscribe(move |event, state| store_apply(&store, event, state));

    // Load saved todos once on startup
    if let Err(err) = manager.hydrate() {
        error!("[APP] failed to load saved todos, starting empty: {}", err);
    }

    provide_context(TodoContext::new(manager, config));

    view! {
        <div class="d-flex justify-content-center align-items-center" style="min-height: 100vh;">
            <div class="container" style="max-width: 500px;">
                <h1 class="text-center mb-4">{title}</h1>

                <NewItemForm />

                <SearchBar />

                <TodoListView />

                <ClearAllButton />
            </div>
        </div>
    }
}
