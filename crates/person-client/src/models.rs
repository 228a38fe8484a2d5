//! Person Entity
//!
//! The single domain entity: a named node with an optional parent.

use std::fmt;

use serde::Serialize;

/// Opaque identifier assigned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Reference from a child to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub id: PersonId,
    /// Only known when the service populated the parent
    pub name: Option<String>,
}

impl ParentRef {
    pub fn id_only(id: PersonId) -> Self {
        Self { id, name: None }
    }
}

/// A person in the parent-child hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Parent reference (None = root)
    pub parent: Option<ParentRef>,
}

impl Person {
    /// Create a root person
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: None,
        }
    }

    /// Create a person under a parent whose name is not known
    pub fn new_child(id: impl Into<PersonId>, name: impl Into<String>, parent: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent: Some(ParentRef::id_only(parent.into())),
        }
    }

    /// Check if this is a root person (no parent)
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn parent_id(&self) -> Option<&PersonId> {
        self.parent.as_ref().map(|p| &p.id)
    }
}

/// Normalized body of create/update requests
///
/// `parent` is always sent, as `null` for a root person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonPayload {
    pub name: String,
    pub parent: Option<PersonId>,
}
