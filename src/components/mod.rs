//! UI Components
//!
//! Leptos components for the to-do page.

mod clear_all_button;
mod new_item_form;
mod search_bar;
mod todo_list_view;
mod todo_row;

pub use clear_all_button::ClearAllButton;
pub use new_item_form::NewItemForm;
pub use search_bar::SearchBar;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
