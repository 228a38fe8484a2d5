//! Wire Format
//!
//! The service is loose about shapes: ids may be strings or numbers,
//! `parent` may be a bare id or a populated object, and the detail endpoint
//! sometimes nests the record under `data` and sometimes does not. All of
//! that is folded into one `Person` here.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::ApiError;
use crate::models::{ParentRef, Person, PersonId};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(Number),
}

impl From<RawId> for PersonId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => PersonId::new(s),
            RawId::Number(n) => PersonId::new(n.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParent {
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: RawId,
        #[serde(default)]
        name: Option<String>,
    },
    Id(RawId),
}

impl From<RawParent> for ParentRef {
    fn from(raw: RawParent) -> Self {
        match raw {
            RawParent::Populated { id, name } => ParentRef { id: id.into(), name },
            RawParent::Id(id) => ParentRef::id_only(id.into()),
        }
    }
}

#[derive(Deserialize)]
struct RawPerson {
    #[serde(rename = "_id", alias = "id")]
    id: RawId,
    name: String,
    #[serde(default)]
    parent: Option<RawParent>,
}

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        Person {
            id: raw.id.into(),
            name: raw.name,
            parent: raw.parent.map(ParentRef::from),
        }
    }
}

#[derive(Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    data: Option<Vec<RawPerson>>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode `{ data: [...] }`; missing or null `data` is an empty list
pub fn decode_list(body: Value) -> Result<Vec<Person>, ApiError> {
    let envelope: ListEnvelope = serde_json::from_value(body)?;
    Ok(envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(Person::from)
        .collect())
}

/// Decode a detail response into one canonical `Person`
///
/// The record is `data` when that is an object, otherwise the body itself.
/// A populated parent at the top level fills in the name when the record
/// only carries the parent's id.
pub fn decode_detail(body: Value) -> Result<Person, ApiError> {
    let record = match body.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => body.clone(),
    };
    let mut person: Person = serde_json::from_value::<RawPerson>(record)?.into();

    let top_parent = body
        .get("parent")
        .filter(|p| p.is_object())
        .and_then(|p| serde_json::from_value::<RawParent>(p.clone()).ok())
        .map(ParentRef::from);

    if let (Some(parent), Some(top)) = (person.parent.as_mut(), top_parent) {
        if parent.name.is_none() && parent.id == top.id {
            parent.name = top.name;
        }
    }
    Ok(person)
}

/// Extract the human-readable message from an error body, if there is one
pub fn error_message(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    body.error
        .or(body.message)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_accepts_numeric_and_string_ids() {
        let persons = decode_list(json!({
            "data": [
                { "id": 1, "name": "A", "parent": null },
                { "id": 2, "name": "B", "parent": 1 },
                { "_id": "64ab", "name": "C", "parent": { "_id": "64aa", "name": "Z" } },
            ]
        }))
        .unwrap();

        assert_eq!(persons.len(), 3);
        assert_eq!(persons[0], Person::new("1", "A"));
        assert_eq!(persons[1], Person::new_child("2", "B", "1"));
        assert_eq!(
            persons[2].parent,
            Some(ParentRef { id: "64aa".into(), name: Some("Z".into()) })
        );
    }

    #[test]
    fn test_list_accepts_any_json_number_as_id() {
        let persons = decode_list(json!({
            "data": [
                { "_id": 18446744073709551615u64, "name": "Big" },
                { "_id": 2.5, "name": "Float", "parent": 18446744073709551615u64 },
            ]
        }))
        .unwrap();

        assert_eq!(persons[0].id.as_str(), "18446744073709551615");
        assert_eq!(persons[1].id.as_str(), "2.5");
        assert_eq!(persons[1].parent_id().map(PersonId::as_str), Some("18446744073709551615"));
    }

    #[test]
    fn test_list_without_data_is_empty() {
        assert!(decode_list(json!({})).unwrap().is_empty());
        assert!(decode_list(json!({ "data": null })).unwrap().is_empty());
    }

    #[test]
    fn test_list_rejects_record_without_name() {
        let err = decode_list(json!({ "data": [{ "_id": "1" }] })).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_detail_nested_under_data() {
        let person = decode_detail(json!({
            "data": { "_id": "2", "name": "B", "parent": { "_id": "1", "name": "A" } }
        }))
        .unwrap();
        assert_eq!(person.name, "B");
        assert_eq!(person.parent, Some(ParentRef { id: "1".into(), name: Some("A".into()) }));
    }

    #[test]
    fn test_detail_at_top_level() {
        let person = decode_detail(json!({
            "_id": "2", "name": "B", "parent": { "_id": "1", "name": "A" }
        }))
        .unwrap();
        assert_eq!(person.id.as_str(), "2");
        assert_eq!(person.parent.and_then(|p| p.name).as_deref(), Some("A"));
    }

    #[test]
    fn test_detail_merges_populated_parent_from_top_level() {
        let person = decode_detail(json!({
            "data": { "_id": "2", "name": "B", "parent": "1" },
            "name": "B",
            "parent": { "_id": "1", "name": "A" }
        }))
        .unwrap();
        assert_eq!(person.parent, Some(ParentRef { id: "1".into(), name: Some("A".into()) }));
    }

    #[test]
    fn test_detail_ignores_top_level_parent_with_other_id() {
        let person = decode_detail(json!({
            "data": { "_id": "2", "name": "B", "parent": "1" },
            "parent": { "_id": "9", "name": "Other" }
        }))
        .unwrap();
        assert_eq!(person.parent, Some(ParentRef::id_only("1".into())));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error":"Name taken"}"#).as_deref(), Some("Name taken"));
        assert_eq!(error_message(r#"{"message":"Bad parent"}"#).as_deref(), Some("Bad parent"));
        assert_eq!(error_message(r#"{"error":""}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }
}
