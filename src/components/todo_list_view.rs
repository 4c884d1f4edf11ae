//! Todo List View Component
//!
//! Renders the rows matching the search query.

use leptos::prelude::*;
use todo_core::domain::filter_items;

use super::TodoRow;
use crate::store::{use_todo_store, TodoViewStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    // Rows keep their index in the full list
    let visible = Memo::new(move |_| {
        store.items().with(|items| store.search().with(|search| filter_items(items, search)))
    });

    view! {
        <ul class="list-group">
            <For
                each=move || visible.get()
                key=|row| (row.index, row.text.clone())
                children=move |row| view! { <TodoRow row=row /> }
            />
        </ul>
    }
}
