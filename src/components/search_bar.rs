//! Search Bar Component

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_todo_store, TodoViewStateStoreFields};

/// Live, case-insensitive filter over the list
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_todo_store();
    let placeholder = ctx.ui().search_placeholder;

    view! {
        <div class="mb-3">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || store.search().get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />
        </div>
    }
}
