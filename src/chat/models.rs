//! The core models for a single chat widget conversation.
use chrono::Local;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Routed through the backend's firewall.
    Protected,
    Standard,
}

impl SessionMode {
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            SessionMode::Protected => "/chat_firewall",
            SessionMode::Standard => "/chat_no_firewall",
        }
    }

    pub fn greeting(&self) -> String {
        let kind = match self {
            SessionMode::Protected => "secure",
            SessionMode::Standard => "standard",
        };
        format!(
            "Hi! I'm your {} customer support assistant. How can I help you today?",
            kind
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            SessionMode::Protected => "Protected Support",
            SessionMode::Standard => "Standard Support",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            SessionMode::Protected => "Firewall ON",
            SessionMode::Standard => "Firewall OFF",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, SessionMode::Protected)
    }
}

/// Time of day the way a chat widget shows it, e.g. `3:07:42 PM`.
pub fn display_time() -> String {
    Local::now().format("%-I:%M:%S %p").to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: u64,
    text: String,
    is_user: bool,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_blocked: Option<bool>,
}

impl Message {
    pub fn user(id: u64, text: &str) -> Self {
        Message {
            id,
            text: text.to_string(),
            is_user: true,
            timestamp: display_time(),
            is_blocked: None,
        }
    }

    pub fn assistant(id: u64, text: &str, is_blocked: Option<bool>) -> Self {
        Message {
            id,
            text: text.to_string(),
            is_user: false,
            timestamp: display_time(),
            is_blocked,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.is_user
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Only ever `Some` for assistant replies to a submission.
    pub fn is_blocked(&self) -> Option<bool> {
        self.is_blocked
    }

    pub fn blocked(&self) -> bool {
        self.is_blocked.unwrap_or(false)
    }
}

/// Append-only, insertion ordered list of messages.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Conversation(Vec<Message>);

impl Conversation {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(SessionMode::Protected.endpoint_path(), "/chat_firewall");
        assert_eq!(SessionMode::Standard.endpoint_path(), "/chat_no_firewall");
    }

    #[test]
    fn test_greetings() {
        assert_eq!(
            SessionMode::Protected.greeting(),
            "Hi! I'm your secure customer support assistant. How can I help you today?"
        );
        assert_eq!(
            SessionMode::Standard.greeting(),
            "Hi! I'm your standard customer support assistant. How can I help you today?"
        );
    }

    #[test]
    fn test_user_message() {
        let msg = Message::user(2, "Hello");
        assert_eq!(msg.id(), 2);
        assert_eq!(msg.text(), "Hello");
        assert!(msg.is_user());
        assert_eq!(msg.is_blocked(), None);
        assert!(!msg.blocked());
        assert!(!msg.timestamp().is_empty());
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message {
            id: 3,
            text: "Request blocked".to_string(),
            is_user: false,
            timestamp: "3:07:42 PM".to_string(),
            is_blocked: Some(true),
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"id":3,"text":"Request blocked","isUser":false,"timestamp":"3:07:42 PM","isBlocked":true}"#
        );

        let msg = Message {
            id: 1,
            text: "Hi".to_string(),
            is_user: false,
            timestamp: "3:07:40 PM".to_string(),
            is_blocked: None,
        };
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"id":1,"text":"Hi","isUser":false,"timestamp":"3:07:40 PM"}"#
        );
    }

    #[test]
    fn test_conversation_keeps_insertion_order() {
        let mut conversation = Conversation::new();
        assert!(conversation.is_empty());

        conversation.push(Message::assistant(1, "greeting", None));
        conversation.push(Message::user(2, "question"));
        conversation.push(Message::assistant(3, "answer", Some(false)));

        let ids: Vec<u64> = conversation.iter().map(Message::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.last().unwrap().text(), "answer");
    }

    #[test]
    fn test_display_time_shape() {
        let ts = display_time();
        assert!(ts.ends_with("AM") || ts.ends_with("PM"));
        assert_eq!(ts.matches(':').count(), 2);
    }
}
