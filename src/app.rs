//! Person Manager App
//!
//! Single page: person list, create/edit form, selected person panel.

use leptos::prelude::*;
use person_client::ApiConfig;

use crate::components::{PersonForm, PersonList, SelectedPersonPanel, ToastContainer};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_override(option_env!("PERSON_API_URL"));
    log::info!("[APP] Using person service at {}", config.base_url);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Load persons on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <div class="container">
            <ToastContainer />
            <PersonList />
            <PersonForm />
            <SelectedPersonPanel />
        </div>
    }
}
