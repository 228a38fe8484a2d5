//! Toast Container Component
//!
//! Renders the toast stack; clicking a toast dismisses it.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let queue = ctx.toasts;

    view! {
        <div class="toast-container">
            <For
                each=move || queue.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.level.as_str())
                            on:click=move |_| queue.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
