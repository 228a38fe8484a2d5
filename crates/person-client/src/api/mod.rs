//! Person Service Adapter
//!
//! Abstract interface to the remote person service plus its HTTP
//! implementation. Responses are normalized into the canonical `Person`
//! before they leave this module.

mod http;
pub mod wire;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Person, PersonId, PersonPayload};

pub use http::HttpPersonApi;

/// CRUD operations against the person service
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait PersonApi {
    /// List all persons in service order
    async fn list_persons(&self) -> Result<Vec<Person>, ApiError>;

    /// Fetch one person with its parent resolved when the service provides it
    async fn get_person(&self, id: &PersonId) -> Result<Person, ApiError>;

    /// Create a new person
    async fn create_person(&self, payload: &PersonPayload) -> Result<(), ApiError>;

    /// Replace name and parent of an existing person
    async fn update_person(&self, id: &PersonId, payload: &PersonPayload) -> Result<(), ApiError>;

    /// Delete person by ID
    async fn delete_person(&self, id: &PersonId) -> Result<(), ApiError>;
}
