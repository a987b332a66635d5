use serde::{Deserialize, Serialize};

/// Query string carried by signup and unregister requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailQuery {
    /// Participant email; any string is accepted.
    pub email: String,
}

/// Confirmation returned by a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMessage {
    /// Human-readable confirmation naming the participant and activity.
    pub message: String,
}

impl ActionMessage {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub detail: String,
    /// HTTP status code, repeated for clients that only see the body.
    pub status: u16,
}
