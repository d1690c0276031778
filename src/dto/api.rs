//! DTOs exposed by the JSON API endpoints.

use serde::{Deserialize, Serialize};

/// Body returned alongside every non-success status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
