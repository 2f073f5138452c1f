use thiserror::Error;

use super::public::ChatReply;

pub const UNREACHABLE_TEXT: &str = "Error: Unable to reach backend.";
pub const INVALID_RESPONSE_TEXT: &str = "Error: Invalid server response.";

#[derive(Error, Debug)]
pub enum BackendError {
    /// The request never produced a response: connection refused,
    /// DNS failure, timeout, etc.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body was unreadable or not a reply.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(e: serde_json::Error) -> Self {
        BackendError::InvalidResponse(e.to_string())
    }
}

impl BackendError {
    /// The synthetic blocked reply shown in place of a real one.
    pub fn fallback_reply(&self) -> ChatReply {
        let response = match self {
            BackendError::Transport(_) => UNREACHABLE_TEXT,
            BackendError::InvalidResponse(_) => INVALID_RESPONSE_TEXT,
        };
        ChatReply {
            is_blocked: true,
            response: response.to_string(),
        }
    }
}
