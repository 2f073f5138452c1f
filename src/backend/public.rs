use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub user: String,
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "isBlocked")]
    pub is_blocked: bool,
    pub response: String,
}

// {
//   "message": "Welcome to the AI Firewall Demo!",
//   "endpoints": {"/chat_no_firewall": "...", "/chat_firewall": "..."},
//   "users": ["alice", "bob", "charlie"],
//   "goal": "..."
// }
#[derive(Clone, Debug, Deserialize)]
pub struct BackendInfo {
    pub message: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CustomerPreview {
    pub customer_id: String,
    pub name: String,
    pub order_count: usize,
    pub has_payment_info: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabasePreview {
    #[serde(rename = "database_preview")]
    pub customers: BTreeMap<String, CustomerPreview>,
}
