//! Person Manager
//!
//! The control loop behind the page: user intents go in, remote calls go
//! out, and list/form state is written back through a `PersonStore`.
//!
//! The person list is a read-through cache. Every successful mutation is
//! followed by exactly one full re-fetch; nothing is patched locally.


use std::cell::Cell;

use log::{debug, warn};

use crate::api::PersonApi;
use crate::error::ActionError;
use crate::form::{FormState, Submission};
use crate::models::{Person, PersonId};
use crate::notify::{Notice, Notifier};
use crate::view::{render_page, PageView};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this person?";

/// Where the list and form state live (signals in the UI, cells in tests)
pub trait PersonStore {
    fn persons(&self) -> Vec<Person>;
    fn set_persons(&self, persons: Vec<Person>);
    fn form(&self) -> FormState;
    fn set_form(&self, form: FormState);

    fn update_form(&self, f: impl FnOnce(&mut FormState)) {
        let mut form = self.form();
        f(&mut form);
        self.set_form(form);
    }
}

/// Asks the user to confirm a destructive action
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

pub struct PersonManager<A, S, N> {
    api: A,
    store: S,
    notifier: N,
    /// Bumped per detail request; only the latest may populate the form
    selection: Cell<u64>,
}

impl<A, S, N> PersonManager<A, S, N>
where
    A: PersonApi,
    S: PersonStore,
    N: Notifier,
{
    pub fn new(api: A, store: S, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
            selection: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn page(&self) -> PageView {
        render_page(&self.store.persons(), &self.store.form())
    }

    pub fn edit_name(&self, name: &str) {
        self.store.update_form(|form| form.set_name(name));
    }

    pub fn edit_parent(&self, parent: &str) {
        self.store.update_form(|form| form.set_parent(parent));
    }

    pub fn cancel_edit(&self) {
        self.invalidate_selection();
        self.store.update_form(FormState::cancel_edit);
    }

    /// Reload the full list; on failure the previous list stays
    pub async fn refresh(&self) {
        match self.api.list_persons().await {
            Ok(persons) => {
                debug!("[PersonManager] Loaded {} persons", persons.len());
                self.store.set_persons(persons);
            }
            Err(err) => self.fail(ActionError::Fetch(err)),
        }
    }

    /// Fetch a person's detail and load it into the form for editing
    pub async fn select(&self, id: &PersonId) {
        let ticket = self.selection.get().wrapping_add(1);
        self.selection.set(ticket);

        let result = self.api.get_person(id).await;
        if self.selection.get() != ticket {
            debug!("[PersonManager] Dropping stale detail for {}", id);
            return;
        }
        match result {
            Ok(person) => self.store.update_form(|form| form.begin_edit(person)),
            Err(err) => self.fail(ActionError::FetchDetail(err)),
        }
    }

    /// Create or update depending on the form mode
    pub async fn submit(&self) {
        let submission = match self.store.form().submission() {
            Ok(submission) => submission,
            Err(err) => return self.fail(err.into()),
        };

        let result = match &submission {
            Submission::Create(payload) => self
                .api
                .create_person(payload)
                .await
                .map(|()| "Person added successfully!"),
            Submission::Update(id, payload) => self
                .api
                .update_person(id, payload)
                .await
                .map(|()| "Person updated successfully!"),
        };

        match result {
            Ok(message) => {
                self.invalidate_selection();
                self.store.update_form(FormState::reset);
                self.notifier.notify(Notice::success(message));
                self.refresh().await;
            }
            Err(err) => self.fail(ActionError::Submit(err)),
        }
    }

    /// Delete after the user confirms; form state is left alone
    pub async fn delete(&self, id: &PersonId, prompt: &impl Prompt) {
        if !prompt.confirm(DELETE_PROMPT) {
            debug!("[PersonManager] Delete of {} declined", id);
            return;
        }
        match self.api.delete_person(id).await {
            Ok(()) => {
                self.notifier.notify(Notice::success("Person deleted successfully!"));
                self.refresh().await;
            }
            Err(err) => self.fail(ActionError::Delete(err)),
        }
    }

    fn invalidate_selection(&self) {
        self.selection.set(self.selection.get().wrapping_add(1));
    }

    fn fail(&self, err: ActionError) {
        let notice = match &err {
            ActionError::Invalid(_) => Notice::warning(err.to_string()),
            other => {
                if let Some(source) = std::error::Error::source(other) {
                    warn!("[PersonManager] {}: {}", other, source);
                }
                Notice::error(err.to_string())
            }
        };
        self.notifier.notify(notice);
    }
}
