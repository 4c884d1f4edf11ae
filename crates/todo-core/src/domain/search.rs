//! Search Filter
//!
//! Case-insensitive substring filtering that keeps each item's position in
//! the full list, so edit/delete actions on a filtered row hit the right item.

use serde::{Deserialize, Serialize};

/// One row of the filtered view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleItem {
    /// Position in the unfiltered list
    pub index: usize,
    pub text: String,
}

/// Whether `text` contains `query`, ignoring case.
/// An empty query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Filter `items` by `query`, preserving order and original positions
pub fn filter_items(items: &[String], query: &str) -> Vec<VisibleItem> {
    items
        .iter()
        .enumerate()
        .filter(|(_, text)| matches_query(text, query))
        .map(|(index, text)| VisibleItem { index, text: text.clone() })
        .collect()
}
