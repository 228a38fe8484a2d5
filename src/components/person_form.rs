//! Person Form Component
//!
//! Create a person, or edit the selected one. Heading and submit label
//! follow the mode.

use leptos::prelude::*;

use crate::components::ParentSelector;
use crate::context::AppContext;

#[component]
pub fn PersonForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = Memo::new(move |_| ctx.page.with(|page| page.form.clone()));
    let options = Signal::derive(move || form.with(|f| f.parent_options.clone()));
    let parent = Signal::derive(move || form.with(|f| f.parent.clone()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <div class="person-form-section">
            <h2 class="section-title">{move || form.with(|f| f.heading)}</h2>
            <form class="person-form" on:submit=on_submit>
                <div class="form-row">
                    <label>"Name:"</label>
                    <input
                        type="text"
                        name="name"
                        required=true
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| ctx.edit_name(&event_target_value(&ev))
                    />
                </div>
                <div class="form-row">
                    <label>"Parent:"</label>
                    <ParentSelector
                        options=options
                        value=parent
                        on_change=move |value: String| ctx.edit_parent(&value)
                    />
                </div>
                <button type="submit" class="submit-btn">
                    {move || form.with(|f| f.submit_label)}
                </button>
                <Show when=move || form.with(|f| f.is_editing)>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                        "Cancel"
                    </button>
                </Show>
            </form>
        </div>
    }
}
