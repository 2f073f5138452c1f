mod models;
pub mod render;
mod session;

pub use models::{Conversation, Message, SessionMode, display_time};
pub use session::{ChatSession, ChatSessionBuilder, SessionSnapshot};
