//! Person List Component
//!
//! All persons in service order, or a placeholder row when there are none.

use leptos::prelude::*;
use person_client::view::EMPTY_LIST_LABEL;
use person_client::{ListView, PersonRow};

use crate::components::PersonListItem;
use crate::context::AppContext;

#[component]
pub fn PersonList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let list = Memo::new(move |_| ctx.page.with(|page| page.list.clone()));
    let rows = move || match list.get() {
        ListView::Rows(rows) => rows,
        ListView::Empty => Vec::new(),
    };

    // Labels are part of the key so a rename or re-parent re-renders the row
    let row_key = |row: &PersonRow| (row.id.clone(), row.name.clone(), row.parent_label.clone());

    view! {
        <div class="person-list">
            <h2 class="section-title">"Persons List"</h2>
            <ul class="person-rows">
                <Show
                    when=move || list.with(|l| matches!(l, ListView::Rows(_)))
                    fallback=|| view! { <li class="person-row placeholder">{EMPTY_LIST_LABEL}</li> }
                >
                    <For
                        each=rows
                        key=row_key
                        children=move |row| view! { <PersonListItem row=row /> }
                    />
                </Show>
            </ul>
        </div>
    }
}
