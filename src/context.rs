//! Application Context
//!
//! Owns the `PersonManager` and the signals it writes to, shared with
//! components via the Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use person_client::{
    render_page, ApiConfig, FormState, HttpPersonApi, PageView, Person, PersonId, PersonManager,
    PersonStore,
};

use crate::browser::BrowserPrompt;
use crate::toast::ToastQueue;

/// List and form state as signals
#[derive(Clone, Copy)]
pub struct SignalStore {
    pub persons: RwSignal<Vec<Person>>,
    pub form: RwSignal<FormState>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            persons: RwSignal::new(Vec::new()),
            form: RwSignal::new(FormState::new()),
        }
    }
}

impl PersonStore for SignalStore {
    fn persons(&self) -> Vec<Person> {
        self.persons.get_untracked()
    }

    fn set_persons(&self, persons: Vec<Person>) {
        self.persons.set(persons);
    }

    fn form(&self) -> FormState {
        self.form.get_untracked()
    }

    fn set_form(&self, form: FormState) {
        self.form.set(form);
    }
}

pub type AppManager = PersonManager<HttpPersonApi, SignalStore, ToastQueue>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    manager: StoredValue<Rc<AppManager>, LocalStorage>,
    pub toasts: ToastQueue,
    /// Everything the page renders, derived from list + form
    pub page: Memo<PageView>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let store = SignalStore::new();
        let toasts = ToastQueue::new();
        let manager = PersonManager::new(HttpPersonApi::new(config), store, toasts);
        let page = Memo::new(move |_| {
            store.persons.with(|persons| store.form.with(|form| render_page(persons, form)))
        });
        Self {
            manager: StoredValue::new_local(Rc::new(manager)),
            toasts,
            page,
        }
    }

    fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<AppManager>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.manager.get_value()));
    }

    /// Reload the person list from the service
    pub fn load(&self) {
        self.run(|m| async move { m.refresh().await });
    }

    /// Load a person into the form for editing
    pub fn select(&self, id: PersonId) {
        self.run(move |m| async move { m.select(&id).await });
    }

    pub fn submit(&self) {
        self.run(|m| async move { m.submit().await });
    }

    /// Ask for confirmation, then delete
    pub fn delete(&self, id: PersonId) {
        self.run(move |m| async move { m.delete(&id, &BrowserPrompt).await });
    }

    pub fn edit_name(&self, name: &str) {
        self.manager.with_value(|m| m.edit_name(name));
    }

    pub fn edit_parent(&self, parent: &str) {
        self.manager.with_value(|m| m.edit_parent(parent));
    }

    pub fn cancel_edit(&self) {
        self.manager.with_value(|m| m.cancel_edit());
    }
}
