//! Error Types
//!
//! `ApiError` is what the adapter returns; `ActionError` is what the user
//! sees once the manager has classified a failed action.

use thiserror::Error;

/// Failure talking to the person service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("id cannot be used in a URL path: {0:?}")]
    InvalidId(String),
}

impl ApiError {
    /// The message carried in the server's error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

/// Form input rejected before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
}

/// A failed user action; `Display` is the notification text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Error fetching persons!")]
    Fetch(#[source] ApiError),
    #[error("Error fetching person details!")]
    FetchDetail(#[source] ApiError),
    #[error("{}", .0.server_message().unwrap_or("Error saving person!"))]
    Submit(#[source] ApiError),
    #[error("Error deleting person!")]
    Delete(#[source] ApiError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_prefers_server_message() {
        let err = ActionError::Submit(ApiError::Status {
            status: 400,
            message: Some("Parent not found".into()),
        });
        assert_eq!(err.to_string(), "Parent not found");

        let err = ActionError::Submit(ApiError::Network("connection refused".into()));
        assert_eq!(err.to_string(), "Error saving person!");
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.to_string(), "server returned 500");
        let err = ApiError::Status { status: 404, message: Some("gone".into()) };
        assert_eq!(err.to_string(), "server returned 404: gone");
    }
}
