use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Raw status and body of a Bokun call. A non-2xx status is data, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.status, self.body)
    }
}
