//! Todo Row Component
//!
//! One list row: text with delete/edit buttons, or the edit input and save
//! button while this row is being edited.

use leptos::prelude::*;
use todo_core::VisibleItem;

use crate::context::use_todo_context;
use crate::store::{use_todo_store, TodoViewStateStoreFields};

#[component]
pub fn TodoRow(row: VisibleItem) -> impl IntoView {
    let ctx = use_todo_context();
    let store = use_todo_store();
    let ui = ctx.ui();

    let index = row.index;
    let text = row.text;
    let is_editing = Memo::new(move |_| {
        store.editing().with(|editing| editing.as_ref().map(|session| session.index) == Some(index))
    });
    let draft = move || store.editing().get().map(|session| session.draft).unwrap_or_default();

    let delete_label = ui.delete_button;
    let edit_label = ui.edit_button;
    let save_label = ui.save_button;

    view! {
        <li class="list-group-item d-flex justify-content-between align-items-center">
            <Show
                when=move || is_editing.get()
                fallback=move || {
                    view! {
                        <span>{text.clone()}</span>
                        <div class="ml-2">
                            <button
                                class="btn btn-danger btn-sm"
                                style="margin-right: 5px;"
                                on:click=move |_| ctx.delete(index)
                            >
                                {delete_label.clone()}
                            </button>
                            <button
                                class="btn btn-info btn-sm"
                                style="margin-right: 5px;"
                                on:click=move |_| ctx.begin_edit(index)
                            >
                                {edit_label.clone()}
                            </button>
                        </div>
                    }
                }
            >
                // Leaving the input saves, like the save button
                <div class="d-flex w-100 align-items-center">
                    <input
                        type="text"
                        class="form-control"
                        prop:value=draft
                        on:input=move |ev| ctx.update_draft(event_target_value(&ev))
                        on:blur=move |_| ctx.commit_edit()
                    />
                    <button class="btn btn-success btn-sm ml-2" on:click=move |_| ctx.commit_edit()>
                        {save_label.clone()}
                    </button>
                </div>
            </Show>
        </li>
    }
}
