//! To-Do Manager
//!
//! Owns the list, the pending entry, the search query and the edit session.
//! Every list mutation is written through to storage before it is applied,
//! so a failed write leaves the in-memory state untouched.

use log::{debug, info, warn};

use crate::domain::{filter_items, EditSession, SessionShift, TodoError, TodoResult, VisibleItem};
use crate::events::{SubscriptionId, Subscribers, TodoEvent};
use crate::storage::TodoStorage;

/// Snapshot of everything the view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<String>,
    pending: String,
    search: String,
    editing: Option<EditSession>,
}

impl TodoState {
    /// Full list in insertion order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Text in the add input
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Items matching the search query, with their positions in the full list
    pub fn visible_items(&self) -> Vec<VisibleItem> {
        filter_items(&self.items, &self.search)
    }
}

/// The to-do list and its persistence
pub struct TodoManager<S> {
    state: TodoState,
    storage: S,
    subscribers: Subscribers<TodoState>,
}

impl<S: TodoStorage> TodoManager<S> {
    /// Empty manager. Call [`TodoManager::hydrate`] to load saved items.
    pub fn new(storage: S) -> Self {
        Self {
            state: TodoState::default(),
            storage,
            subscribers: Subscribers::default(),
        }
    }

    /// Replace the list with whatever storage holds. A missing entry loads
    /// as an empty list; a corrupt one is an error and leaves state alone.
    pub fn hydrate(&mut self) -> TodoResult<usize> {
        let items = self.storage.read()?.unwrap_or_default();
        let count = items.len();
        info!("[TODO] hydrated {} items", count);
        self.state.items = items;
        self.state.editing = None;
        self.emit(TodoEvent::Hydrated { count });
        Ok(count)
    }

    // ========================
    // Subscriptions
    // ========================

    /// Register a listener called after every state change
    pub fn subscribe(&mut self, listener: impl Fn(&TodoEvent, &TodoState) + 'static) -> SubscriptionId {
        self.subscribers.add(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn emit(&self, event: TodoEvent) {
        self.subscribers.emit(&event, &self.state);
    }

    // ========================
    // Accessors
    // ========================

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn items(&self) -> &[String] {
        self.state.items()
    }

    pub fn item_count(&self) -> usize {
        self.state.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    pub fn pending(&self) -> &str {
        self.state.pending()
    }

    pub fn search(&self) -> &str {
        self.state.search()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.state.editing()
    }

    pub fn visible_items(&self) -> Vec<VisibleItem> {
        self.state.visible_items()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================
    // Adding
    // ========================

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.state.pending = text.into();
        self.emit(TodoEvent::PendingChanged);
    }

    /// Add whatever is in the pending entry buffer
    pub fn submit_pending(&mut self) -> TodoResult<usize> {
        let text = self.state.pending.clone();
        self.add_item(&text)
    }

    /// Append `text` and clear the pending buffer. Blank text is rejected.
    /// Returns the new item's index.
    pub fn add_item(&mut self, text: &str) -> TodoResult<usize> {
        if text.trim().is_empty() {
            warn!("[TODO] rejected empty item");
            return Err(TodoError::EmptyText);
        }

        let mut items = self.state.items.clone();
        items.push(text.to_string());
        self.storage.write(&items)?;

        let index = items.len() - 1;
        self.state.items = items;
        self.state.pending.clear();
        debug!("[TODO] added item at {}", index);
        self.emit(TodoEvent::ItemAdded { index });
        Ok(index)
    }

    // ========================
    // Removing
    // ========================

    /// Remove the item at `index`. Out-of-range indices are ignored.
    /// An open edit keeps following its item; if its item is the one
    /// removed, the edit is dropped.
    pub fn delete_item(&mut self, index: usize) -> TodoResult<Option<String>> {
        if index >= self.state.items.len() {
            debug!("[TODO] delete ignored, index {} out of range", index);
            return Ok(None);
        }

        let mut items = self.state.items.clone();
        let removed = items.remove(index);
        self.storage.write(&items)?;
        self.state.items = items;

        let shift = self.state.editing.as_mut().map(|session| session.follow_removal(index));
        let orphaned = shift == Some(SessionShift::Orphaned);
        if orphaned {
            self.state.editing = None;
        } else if let (Some(SessionShift::Shifted), Some(session)) = (shift, self.state.editing.as_ref()) {
            debug!("[TODO] edit session moved to {}", session.index);
        }

        debug!("[TODO] deleted item at {}", index);
        self.emit(TodoEvent::ItemDeleted { index });
        if orphaned {
            warn!("[TODO] edited item was deleted, edit discarded");
            self.emit(TodoEvent::EditCancelled);
        }
        Ok(Some(removed))
    }

    /// Empty the list and remove the persisted entry
    pub fn clear_all(&mut self) -> TodoResult<()> {
        self.storage.clear()?;
        self.state.items.clear();
        self.state.editing = None;
        info!("[TODO] cleared all items");
        self.emit(TodoEvent::Cleared);
        Ok(())
    }

    // ========================
    // Editing
    // ========================

    /// Start editing `index`, seeding the draft with its text.
    /// Any open edit is dropped without saving.
    pub fn begin_edit(&mut self, index: usize) -> TodoResult<()> {
        let text = self.state.items.get(index).cloned().ok_or(TodoError::IndexOutOfRange {
            index,
            len: self.state.items.len(),
        })?;
        if let Some(previous) = self.state.editing.as_ref() {
            debug!("[TODO] replacing unsaved edit of {}", previous.index);
        }
        self.state.editing = Some(EditSession::new(index, text));
        self.emit(TodoEvent::EditStarted { index });
        Ok(())
    }

    /// Set the draft of the open edit. Returns false when nothing is being edited.
    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        match self.state.editing.as_mut() {
            Some(session) => {
                session.draft = text.into();
                self.emit(TodoEvent::DraftChanged);
                true
            }
            None => false,
        }
    }

    /// Save the open edit and close it. A blank draft is rejected and the
    /// edit stays open. Without an open edit this does nothing, so a blur
    /// following a save is harmless. Returns the saved index.
    pub fn commit_edit(&mut self) -> TodoResult<Option<usize>> {
        let Some(session) = self.state.editing.as_ref() else {
            return Ok(None);
        };
        if session.is_blank() {
            warn!("[TODO] rejected empty edit");
            return Err(TodoError::EmptyText);
        }

        let index = session.index;
        let len = self.state.items.len();
        if index >= len {
            warn!("[TODO] edit target {} no longer exists", index);
            return Err(TodoError::IndexOutOfRange { index, len });
        }

        let mut items = self.state.items.clone();
        items[index] = session.draft.clone();
        self.storage.write(&items)?;

        self.state.items = items;
        self.state.editing = None;
        debug!("[TODO] committed edit at {}", index);
        self.emit(TodoEvent::EditCommitted { index });
        Ok(Some(index))
    }

    /// Close the open edit without saving
    pub fn cancel_edit(&mut self) -> bool {
        if self.state.editing.take().is_some() {
            self.emit(TodoEvent::EditCancelled);
            true
        } else {
            false
        }
    }

    // ========================
    // Searching
    // ========================

    /// Replace the search query. Only the visible view changes.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search = query.into();
        self.emit(TodoEvent::SearchChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStorage, MemoryStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn manager() -> TodoManager<JsonStorage<MemoryStore>> {
        TodoManager::new(JsonStorage::new(MemoryStore::new(), "todos"))
    }

    fn manager_with(items: &[&str]) -> TodoManager<JsonStorage<MemoryStore>> {
        let mut m = manager();
        for item in items {
            m.add_item(item).unwrap();
        }
        m
    }

    #[test]
    fn test_add_item() {
        let mut m = manager();
        m.set_pending("Buy milk");
        assert_eq!(m.submit_pending().unwrap(), 0);
        assert_eq!(m.items(), ["Buy milk"]);
        assert_eq!(m.pending(), "");
    }

    #[test]
    fn test_add_keeps_text_as_entered() {
        let mut m = manager();
        m.add_item("  padded  ").unwrap();
        assert_eq!(m.items(), ["  padded  "]);
    }

    #[test]
    fn test_add_empty_rejected() {
        let mut m = manager_with(&["a"]);
        m.set_pending("   ");
        assert!(matches!(m.submit_pending(), Err(TodoError::EmptyText)));
        assert!(matches!(m.add_item(""), Err(TodoError::EmptyText)));
        assert_eq!(m.items(), ["a"]);
        assert_eq!(m.pending(), "   ");
    }

    #[test]
    fn test_delete_shifts_left() {
        let mut m = manager_with(&["a", "b", "c"]);
        assert_eq!(m.delete_item(1).unwrap(), Some("b".to_string()));
        assert_eq!(m.items(), ["a", "c"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut m = manager_with(&["a"]);
        let events = Rc::new(RefCell::new(0));
        let counter = events.clone();
        m.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert_eq!(m.delete_item(5).unwrap(), None);
        assert_eq!(m.items(), ["a"]);
        assert_eq!(*events.borrow(), 0);
    }

    #[test]
    fn test_edit_roundtrip() {
        let mut m = manager_with(&["a", "b"]);
        m.begin_edit(1).unwrap();
        assert_eq!(m.editing().unwrap().draft, "b");
        assert!(m.update_draft("X"));
        assert_eq!(m.commit_edit().unwrap(), Some(1));
        assert_eq!(m.items(), ["a", "X"]);
        assert!(m.editing().is_none());
    }

    #[test]
    fn test_empty_commit_keeps_session() {
        let mut m = manager_with(&["a"]);
        m.begin_edit(0).unwrap();
        m.update_draft("  ");
        assert!(matches!(m.commit_edit(), Err(TodoError::EmptyText)));
        assert_eq!(m.items(), ["a"]);
        assert_eq!(m.editing(), Some(&EditSession::new(0, "  ".to_string())));
    }

    #[test]
    fn test_commit_without_session_is_noop() {
        let mut m = manager_with(&["a"]);
        assert_eq!(m.commit_edit().unwrap(), None);
        assert!(!m.update_draft("ignored"));
    }

    #[test]
    fn test_begin_edit_replaces_previous() {
        let mut m = manager_with(&["a", "b"]);
        m.begin_edit(0).unwrap();
        m.update_draft("unsaved");
        m.begin_edit(1).unwrap();
        assert_eq!(m.editing(), Some(&EditSession::new(1, "b".to_string())));
        assert_eq!(m.items(), ["a", "b"]);
    }

    #[test]
    fn test_begin_edit_out_of_range() {
        let mut m = manager_with(&["a"]);
        assert!(matches!(
            m.begin_edit(3),
            Err(TodoError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(m.editing().is_none());
    }

    #[test]
    fn test_delete_before_edit_target_follows_item() {
        let mut m = manager_with(&["a", "b", "c"]);
        m.begin_edit(2).unwrap();
        m.update_draft("C!");
        m.delete_item(0).unwrap();
        assert_eq!(m.editing().unwrap().index, 1);
        m.commit_edit().unwrap();
        assert_eq!(m.items(), ["b", "C!"]);
    }

    #[test]
    fn test_delete_edit_target_drops_session() {
        let mut m = manager_with(&["a", "b"]);
        m.begin_edit(1).unwrap();
        m.delete_item(1).unwrap();
        assert!(m.editing().is_none());
        assert_eq!(m.items(), ["a"]);
    }

    #[test]
    fn test_cancel_edit() {
        let mut m = manager_with(&["a"]);
        m.begin_edit(0).unwrap();
        m.update_draft("zzz");
        assert!(m.cancel_edit());
        assert!(!m.cancel_edit());
        assert_eq!(m.items(), ["a"]);
    }

    #[test]
    fn test_clear_all_closes_session() {
        let mut m = manager_with(&["a", "b"]);
        m.begin_edit(0).unwrap();
        m.clear_all().unwrap();
        assert!(m.is_empty());
        assert!(m.editing().is_none());
        assert!(!m.storage().store().contains_key("todos"));
    }

    #[test]
    fn test_search_does_not_touch_list() {
        let mut m = manager_with(&["Alpha", "beta", "ALPINE"]);
        m.set_search("alp");
        let visible = m.visible_items();
        assert_eq!(visible.iter().map(|v| v.index).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(m.item_count(), 3);
        assert_eq!(m.storage().read().unwrap().unwrap().len(), 3);
    }

    #[test]
    fn test_failed_write_leaves_state() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let mut m = TodoManager::new(JsonStorage::new(store, "todos"));

        assert!(matches!(m.add_item("a"), Err(TodoError::Storage(_))));
        assert!(m.is_empty());
        assert!(matches!(m.clear_all(), Err(TodoError::Storage(_))));
    }

    #[test]
    fn test_failed_write_keeps_edit_open() {
        let mut m = manager_with(&["a"]);
        m.begin_edit(0).unwrap();
        m.update_draft("b");

        m.storage_mut().store_mut().set_fail_writes(true);

        assert!(matches!(m.commit_edit(), Err(TodoError::Storage(_))));
        assert_eq!(m.items(), ["a"]);
        assert!(m.editing().is_some());
    }

    #[test]
    fn test_listener_sees_state_after_change() {
        let mut m = manager();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        m.subscribe(move |event, state| sink.borrow_mut().push((event.clone(), state.items().to_vec())));

        m.add_item("a").unwrap();
        m.set_search("x");

        let seen = seen.borrow();
        assert_eq!(seen[0], (TodoEvent::ItemAdded { index: 0 }, vec!["a".to_string()]));
        assert_eq!(seen[1].0, TodoEvent::SearchChanged);
    }

    #[test]
    fn test_orphaned_edit_emits_cancel() {
        let mut m = manager_with(&["a"]);
        m.begin_edit(0).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        m.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        m.delete_item(0).unwrap();
        assert_eq!(*seen.borrow(), vec![TodoEvent::ItemDeleted { index: 0 }, TodoEvent::EditCancelled]);
    }
}
