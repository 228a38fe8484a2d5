//! Selected Person Panel
//!
//! Read-only detail of the person being edited.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SelectedPersonPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let selected = Memo::new(move |_| ctx.page.with(|page| page.selected.clone()));

    move || {
        selected.get().map(|person| {
            view! {
                <div class="selected-person">
                    <h2 class="section-title">"Selected Person"</h2>
                    <p><strong>"Name: "</strong>{person.name}</p>
                    <p><strong>"Parent: "</strong>{person.parent_label}</p>
                </div>
            }
        })
    }
}
