//! View Derivation
//!
//! Pure mapping from the person list and form state to what the page shows.
//! Components only lay this out; all labels are decided here.

use std::collections::HashMap;

use crate::form::{FormState, ROOT_VALUE};
use crate::models::{Person, PersonId};

pub const ROOT_LABEL: &str = "Root";
pub const EMPTY_LIST_LABEL: &str = "No person found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub id: PersonId,
    pub name: String,
    pub parent_label: String,
}

impl PersonRow {
    pub fn name_line(&self) -> String {
        format!("Name: {}", self.name)
    }

    pub fn parent_line(&self) -> String {
        format!("Parent: {}", self.parent_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Placeholder row
    Empty,
    Rows(Vec<PersonRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub name: String,
    pub parent: String,
    pub parent_options: Vec<ParentOption>,
    pub is_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedView {
    pub name: String,
    pub parent_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub list: ListView,
    pub form: FormView,
    pub selected: Option<SelectedView>,
}

/// Resolve a person's parent to a display label
///
/// Populated name first, then the name of the listed person with that id,
/// then the raw id.
fn parent_label(person: &Person, names: &HashMap<&PersonId, &str>) -> String {
    match &person.parent {
        None => ROOT_LABEL.to_string(),
        Some(parent) => parent
            .name
            .clone()
            .or_else(|| names.get(&parent.id).map(|n| n.to_string()))
            .unwrap_or_else(|| parent.id.to_string()),
    }
}

pub fn render_page(persons: &[Person], form: &FormState) -> PageView {
    let names: HashMap<&PersonId, &str> = persons.iter().map(|p| (&p.id, p.name.as_str())).collect();

    let list = if persons.is_empty() {
        ListView::Empty
    } else {
        ListView::Rows(
            persons
                .iter()
                .map(|p| PersonRow {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    parent_label: parent_label(p, &names),
                })
                .collect(),
        )
    };

    let mut parent_options = Vec::with_capacity(persons.len() + 1);
    parent_options.push(ParentOption {
        value: ROOT_VALUE.to_string(),
        label: ROOT_LABEL.to_string(),
    });
    parent_options.extend(persons.iter().map(|p| ParentOption {
        value: p.id.as_str().to_string(),
        label: p.name.clone(),
    }));

    let is_editing = form.is_editing();
    let form_view = FormView {
        heading: if is_editing { "Edit Person" } else { "Add Person" },
        submit_label: if is_editing { "Update Person" } else { "Add Person" },
        name: form.name.clone(),
        parent: form.parent.clone(),
        parent_options,
        is_editing,
    };

    let selected = form.selected().map(|p| SelectedView {
        name: p.name.clone(),
        parent_label: parent_label(p, &names),
    });

    PageView { list, form: form_view, selected }
}
