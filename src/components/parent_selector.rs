//! Parent Selector Component
//!
//! Dropdown of possible parents; the first option is the "Root" sentinel.

use leptos::prelude::*;
use person_client::ParentOption;

#[component]
pub fn ParentSelector(
    options: Signal<Vec<ParentOption>>,
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            name="parent"
            class="parent-selector"
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <For
                each=move || options.get()
                key=|opt| (opt.value.clone(), opt.label.clone())
                children=move |opt| {
                    let option_value = opt.value.clone();
                    let is_selected = move || value.with(|v| *v == option_value);
                    view! {
                        <option value=opt.value prop:selected=is_selected>
                            {opt.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
