//! New Item Form Component
//!
//! Text input plus add button for appending a todo.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::store::{use_todo_store, TodoViewStateStoreFields};

/// Form for adding a todo at the end of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_todo_store();
    let ui = ctx.ui();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_pending();
    };

    view! {
        <form class="mb-3" on:submit=add_item>
            <input
                type="text"
                class="form-control"
                placeholder=ui.add_placeholder
                prop:value=move || store.pending().get()
                on:input=move |ev| ctx.set_pending(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary mt-2 w-100">
                {ui.add_button}
            </button>
        </form>
    }
}
