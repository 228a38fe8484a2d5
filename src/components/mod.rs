//! UI Components
//!
//! Leptos components for the person manager page.

mod parent_selector;
mod person_form;
mod person_list;
mod person_list_item;
mod selected_person_panel;
mod toast_container;

pub use parent_selector::ParentSelector;
pub use person_form::PersonForm;
pub use person_list::PersonList;
pub use person_list_item::PersonListItem;
pub use selected_person_panel::SelectedPersonPanel;
pub use toast_container::ToastContainer;
