//! Client side of the chat backend. The backend decides whether a
//! prompt is blocked; this module only moves requests and replies.
mod client;
mod error;
pub mod public;

pub use client::{ChatBackend, HttpBackend};
pub use error::{BackendError, INVALID_RESPONSE_TEXT, UNREACHABLE_TEXT};
pub use public::{BackendInfo, ChatReply, ChatRequest, CustomerPreview, DatabasePreview};
