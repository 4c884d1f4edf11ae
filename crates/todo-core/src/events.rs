//! Change Notifications
//!
//! The manager announces every state change to its subscribers, handing them
//! the event and the state as it stands afterwards. Views subscribe and
//! redraw; nothing in the manager knows how rendering happens.

/// What changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    /// List loaded from storage at startup
    Hydrated { count: usize },
    ItemAdded { index: usize },
    ItemDeleted { index: usize },
    Cleared,
    EditStarted { index: usize },
    DraftChanged,
    EditCommitted { index: usize },
    EditCancelled,
    PendingChanged,
    SearchChanged,
}

impl TodoEvent {
    /// Event changed the persisted list
    pub fn touches_list(&self) -> bool {
        matches!(
            self,
            TodoEvent::Hydrated { .. }
                | TodoEvent::ItemAdded { .. }
                | TodoEvent::ItemDeleted { .. }
                | TodoEvent::Cleared
                | TodoEvent::EditCommitted { .. }
        )
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn Fn(&TodoEvent, &S)>;

/// Ordered set of listeners
pub struct Subscribers<S> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
}

impl<S> Default for Subscribers<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<S> Subscribers<S> {
    pub fn add(&mut self, listener: impl Fn(&TodoEvent, &S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Call every listener in subscription order
    pub fn emit(&self, event: &TodoEvent, state: &S) {
        for (_, listener) in &self.listeners {
            listener(event, state);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscribers::<u32>::default();

        let first = seen.clone();
        subs.add(move |_, state| first.borrow_mut().push(("first", *state)));
        let second = seen.clone();
        subs.add(move |_, state| second.borrow_mut().push(("second", *state)));

        subs.emit(&TodoEvent::Cleared, &7);
        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_remove() {
        let count = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::<()>::default();
        let counter = count.clone();
        let id = subs.add(move |_, _| *counter.borrow_mut() += 1);

        subs.emit(&TodoEvent::SearchChanged, &());
        assert!(subs.remove(id));
        assert!(!subs.remove(id));
        subs.emit(&TodoEvent::SearchChanged, &());

        assert_eq!(*count.borrow(), 1);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_touches_list() {
        assert!(TodoEvent::ItemAdded { index: 0 }.touches_list());
        assert!(TodoEvent::Cleared.touches_list());
        assert!(!TodoEvent::DraftChanged.touches_list());
        assert!(!TodoEvent::SearchChanged.touches_list());
    }
}
