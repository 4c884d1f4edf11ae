//! Domain Layer
//!
//! Plain data for the to-do list: the edit session, the search filter and
//! the error types. No I/O happens here.

mod edit_session;
mod error;
mod search;

pub use edit_session::{EditSession, SessionShift};
pub use error::{StorageError, StorageResult, TodoError, TodoResult};
pub use search::{filter_items, matches_query, VisibleItem};
