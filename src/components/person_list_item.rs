//! Person List Item Component
//!
//! One row: name, resolved parent, edit and delete buttons.

use leptos::prelude::*;
use person_client::PersonRow;

use crate::context::AppContext;

#[component]
pub fn PersonListItem(row: PersonRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let name_line = row.name_line();
    let parent_line = row.parent_line();
    let select_id = row.id.clone();
    let delete_id = row.id;

    view! {
        <li class="person-row">
            <div class="person-labels">
                <h5>{name_line}</h5>
                <h5>{parent_line}</h5>
            </div>
            <div class="person-actions">
                <button class="edit-btn" on:click=move |_| ctx.select(select_id.clone())>
                    "Edit"
                </button>
                // Confirmation happens inside the delete flow
                <button class="delete-btn" on:click=move |_| ctx.delete(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
