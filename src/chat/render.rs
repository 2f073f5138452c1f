//! Plain text rendering of a chat widget for the terminal.
use super::models::{Message, SessionMode};

pub const BLOCKED_NOTICE: &str = "! Message blocked by firewall";
pub const TYPING_INDICATOR: &str = "Typing...";

pub fn header(mode: SessionMode) -> String {
    format!("{} [{}]", mode.title(), mode.badge())
}

/// Render one message. Assistant messages in a protected session get
/// a `[Protected]` badge and blocked messages get a notice line.
pub fn message(msg: &Message, mode: SessionMode) -> String {
    let author = if msg.is_user() { "You" } else { "Assistant" };

    let mut meta = format!("{} {}", author, msg.timestamp());
    if mode.is_protected() && !msg.is_user() {
        meta.push_str(" [Protected]");
    }

    let mut out = format!("{}\n  {}", meta, msg.text());
    if msg.blocked() {
        out.push_str("\n  ");
        out.push_str(BLOCKED_NOTICE);
    }
    out
}

pub fn conversation(messages: &[Message], mode: SessionMode) -> String {
    let mut lines = vec![header(mode)];
    lines.extend(messages.iter().map(|m| message(m, mode)));
    lines.join("\n\n")
}
