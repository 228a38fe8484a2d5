//! API Configuration
//!
//! Where the person service lives. Passed to the adapter at construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::ApiError;
use crate::models::PersonId;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Characters escaped when an id becomes one path segment
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use `override_url` when given and non-empty, else the default
    pub fn from_override(override_url: Option<&str>) -> Self {
        match override_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Absolute URL for an endpoint path such as `persons` or `person/42`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL for `<path>/<id>` with the id kept inside a single segment
    ///
    /// Empty and dot-only ids are rejected: URL parsers resolve `.` and `..`
    /// (even percent-encoded) and would address a different resource.
    pub fn resource(&self, path: &str, id: &PersonId) -> Result<String, ApiError> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(ApiError::InvalidId(id.to_string()));
        }
        let segment = utf8_percent_encode(id.as_str(), PATH_SEGMENT_ENCODE_SET);
        Ok(format!("{}/{}", self.endpoint(path), segment))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
