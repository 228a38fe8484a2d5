//! Person Client
//!
//! Framework-independent core of the person manager: the canonical
//! `Person` model, the REST adapter, the form/mode state holder, the view
//! derivation and the controller that ties them together.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod manager;
pub mod models;
pub mod notify;
pub mod view;

pub use api::{HttpPersonApi, PersonApi};
pub use config::ApiConfig;
pub use error::{ActionError, ApiError, ValidationError};
pub use form::{FormMode, FormState, Submission};
pub use manager::{PersonManager, PersonStore, Prompt};
pub use models::{ParentRef, Person, PersonId, PersonPayload};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use view::{render_page, FormView, ListView, PageView, ParentOption, PersonRow, SelectedView};
