//! Clear All Button Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_todo_store, TodoViewStateStoreFields};

/// Wipes the list and its saved copy. Hidden while the list is empty.
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_todo_store();
    let label = ctx.ui().clear_all_button;

    view! {
        <Show when=move || store.items().with(|items| !items.is_empty())>
            <button class="btn btn-warning mt-3 w-100" on:click=move |_| ctx.clear_all()>
                {label.clone()}
            </button>
        </Show>
    }
}
