//! Form State
//!
//! The in-progress name/parent input and whether it creates a new person
//! or edits the selected one.

use crate::error::ValidationError;
use crate::models::{Person, PersonId, PersonPayload};

/// Value of the parent selector meaning "no parent"
pub const ROOT_VALUE: &str = "";

/// Create a new person, or edit the selected one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(Person),
}

/// What a valid submit sends downstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(PersonPayload),
    Update(PersonId, PersonPayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub name: String,
    /// Selected parent id, `ROOT_VALUE` for none
    pub parent: String,
    pub mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// The person being edited, if any
    pub fn selected(&self) -> Option<&Person> {
        match &self.mode {
            FormMode::Edit(person) => Some(person),
            FormMode::Create => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = parent.into();
    }

    /// Load a freshly fetched person into the form and enter edit mode
    pub fn begin_edit(&mut self, person: Person) {
        self.name = person.name.clone();
        self.parent = person
            .parent_id()
            .map(|id| id.as_str().to_string())
            .unwrap_or_else(|| ROOT_VALUE.to_string());
        self.mode = FormMode::Edit(person);
    }

    /// Back to empty create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Validate and normalize the current input
    pub fn submission(&self) -> Result<Submission, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let payload = PersonPayload {
            name: name.to_string(),
            parent: normalize_parent(&self.parent),
        };
        Ok(match &self.mode {
            FormMode::Create => Submission::Create(payload),
            FormMode::Edit(person) => Submission::Update(person.id.clone(), payload),
        })
    }
}

/// Empty selector value means root
pub fn normalize_parent(value: &str) -> Option<PersonId> {
    let value = value.trim();
    if value == ROOT_VALUE {
        None
    } else {
        Some(PersonId::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parent_submits_as_null() {
        let mut form = FormState::new();
        form.set_name("C");
        form.set_parent("");
        assert_eq!(
            form.submission(),
            Ok(Submission::Create(PersonPayload { name: "C".into(), parent: None }))
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = FormState::new();
        form.set_name("   ");
        assert_eq!(form.submission(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_begin_edit_populates_from_person() {
        let mut form = FormState::new();
        form.begin_edit(Person::new_child("2", "B", "1"));
        assert!(form.is_editing());
        assert_eq!(form.name, "B");
        assert_eq!(form.parent, "1");

        form.begin_edit(Person::new("1", "A"));
        assert_eq!(form.name, "A");
        assert_eq!(form.parent, ROOT_VALUE);
        assert_eq!(form.selected().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn test_edit_mode_submits_update() {
        let mut form = FormState::new();
        form.begin_edit(Person::new("7", "G"));
        form.set_name(" Gina ");
        form.set_parent("3");
        assert_eq!(
            form.submission(),
            Ok(Submission::Update(
                "7".into(),
                PersonPayload { name: "Gina".into(), parent: Some("3".into()) }
            ))
        );
    }

    #[test]
    fn test_cancel_edit_resets() {
        let mut form = FormState::new();
        form.begin_edit(Person::new_child("2", "B", "1"));
        form.cancel_edit();
        assert_eq!(form, FormState::new());
        assert!(!form.is_editing());
    }
}
