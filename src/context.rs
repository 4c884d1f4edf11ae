//! Application Context
//!
//! The to-do manager shared with every component via Leptos Context API.
//! Components call these methods; state flows back through the view store.

use leptos::prelude::*;
use log::{error, warn};
use todo_core::{TodoConfig, TodoError, TodoManager, TodoResult, UiStrings};

use crate::storage::PageTodoStorage;

type Manager = TodoManager<PageTodoStorage>;

/// Handle to the manager provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Holds browser storage handles, so it stays on this thread
    manager: StoredValue<Manager, LocalStorage>,
    config: StoredValue<TodoConfig>,
}

impl TodoContext {
    pub fn new(manager: Manager, config: TodoConfig) -> Self {
        Self {
            manager: StoredValue::new_local(manager),
            config: StoredValue::new(config),
        }
    }

    /// UI labels
    pub fn ui(&self) -> UiStrings {
        self.config.with_value(|config| config.ui.clone())
    }

    /// Run `op` against the manager, reporting any failure
    fn run<T>(&self, op: impl FnOnce(&mut Manager) -> TodoResult<T>) -> Option<T> {
        match self.manager.try_update_value(op) {
            Some(Ok(value)) => Some(value),
            Some(Err(err)) => {
                self.report(err);
                None
            }
            None => {
                warn!("[APP] todo manager already disposed");
                None
            }
        }
    }

    /// Blank input gets a blocking alert, everything else goes to the console
    fn report(&self, err: TodoError) {
        if err.is_user_facing() {
            let message = self.config.with_value(|config| config.ui.empty_text_alert.clone());
            alert(&message);
        } else {
            error!("[APP] {}", err);
        }
    }

    pub fn set_pending(&self, text: String) {
        self.manager.update_value(|m| m.set_pending(text));
    }

    /// Add the text in the add input
    pub fn submit_pending(&self) {
        self.run(|m| m.submit_pending());
    }

    pub fn delete(&self, index: usize) {
        self.run(|m| m.delete_item(index));
    }

    pub fn clear_all(&self) {
        self.run(|m| m.clear_all());
    }

    pub fn begin_edit(&self, index: usize) {
        self.run(|m| m.begin_edit(index));
    }

    pub fn update_draft(&self, text: String) {
        self.manager.update_value(|m| {
            m.update_draft(text);
        });
    }

    /// Save the open edit (save button or edit input blur)
    pub fn commit_edit(&self) {
        self.run(|m| m.commit_edit());
    }

    pub fn set_search(&self, query: String) {
        self.manager.update_value(|m| m.set_search(query));
    }
}

/// Get the to-do context
pub fn use_todo_context() -> TodoContext {
    use_context::<TodoContext>().expect("TodoContext should be provided")
}

fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                error!("[APP] alert failed: {:?}", e);
            }
        }
        None => error!("[APP] {}", message),
    }
}
