//! Edit Session
//!
//! At most one item is edited at a time. The session remembers which
//! position it targets and the text typed so far.

use serde::{Deserialize, Serialize};

/// An open edit on a single list position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// Position of the edited item in the full (unfiltered) list
    pub index: usize,
    /// Text typed into the edit input
    pub draft: String,
}

/// What happens to an open session when an item is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionShift {
    /// Removed item sits after the target
    Unchanged,
    /// Removed item sat before the target, target moved down by one
    Shifted,
    /// The edited item itself was removed
    Orphaned,
}

impl EditSession {
    pub fn new(index: usize, draft: String) -> Self {
        Self { index, draft }
    }

    /// Keep the session pointed at the same item after `removed` is deleted.
    pub fn follow_removal(&mut self, removed: usize) -> SessionShift {
        if removed == self.index {
            SessionShift::Orphaned
        } else if removed < self.index {
            self.index -= 1;
            SessionShift::Shifted
        } else {
            SessionShift::Unchanged
        }
    }

    /// Draft is empty once surrounding whitespace is ignored
    pub fn is_blank(&self) -> bool {
        self.draft.trim().is_empty()
    }
}
