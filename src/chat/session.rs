use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use uuid::Uuid;

use super::models::{Conversation, Message, SessionMode};
use crate::backend::{ChatBackend, ChatReply, ChatRequest};
use crate::core::DEFAULT_USER;

#[derive(Default)]
struct SessionState {
    conversation: Conversation,
    loading: bool,
    draft: String,
    last_id: u64,
}

impl SessionState {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Read-only copy of a session at a point in time.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub mode: SessionMode,
    pub messages: Vec<Message>,
    pub is_loading: bool,
    pub draft: String,
}

/// One chat widget's conversation with the backend.
///
/// A session allows at most one outstanding request. Submissions made
/// while a request is in flight, or with blank text, are dropped
/// without touching any state. Every accepted submission appends
/// exactly one user message and, once the backend answers or fails,
/// exactly one assistant message.
///
/// Use `ChatSession::builder()` to construct a `ChatSession`.
pub struct ChatSession {
    session_id: String,
    mode: SessionMode,
    user: String,
    backend: Arc<dyn ChatBackend>,
    state: Mutex<SessionState>,
}

// Clears the loading flag when the request completes, fails, or the
// submit future is dropped.
struct LoadingGuard<'a> {
    session: &'a ChatSession,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.session.lock().loading = false;
    }
}

impl ChatSession {
    pub fn builder(mode: SessionMode, backend: Arc<dyn ChatBackend>) -> ChatSessionBuilder {
        ChatSessionBuilder::new(mode, backend)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // State is only mutated in small non-panicking sections so a
        // poisoned lock still holds consistent data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn messages(&self) -> Vec<Message> {
        self.lock().conversation.messages()
    }

    pub fn len(&self) -> usize {
        self.lock().conversation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().conversation.is_empty()
    }

    pub fn draft(&self) -> String {
        self.lock().draft.clone()
    }

    pub fn set_draft(&self, text: &str) {
        self.lock().draft = text.to_string();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            mode: self.mode,
            messages: state.conversation.messages(),
            is_loading: state.loading,
            draft: state.draft.clone(),
        }
    }

    /// Submit `text` to the backend and wait for the reply.
    ///
    /// Returns the assistant message that was appended, or `None` if
    /// the submission was ignored.
    pub async fn submit(&self, text: &str) -> Option<Message> {
        let prompt = self.begin(Some(text))?;
        Some(self.complete(prompt).await)
    }

    /// Submit whatever is currently in the draft.
    pub async fn submit_draft(&self) -> Option<Message> {
        let prompt = self.begin(None)?;
        Some(self.complete(prompt).await)
    }

    // Checks the preconditions and, if they hold, records the user
    // message, clears the draft and raises the loading flag in one
    // critical section.
    fn begin(&self, text: Option<&str>) -> Option<String> {
        let mut state = self.lock();
        let prompt = match text {
            Some(text) => text.to_string(),
            None => state.draft.clone(),
        };

        if prompt.trim().is_empty() {
            tracing::debug!(session_id = %self.session_id, "Ignoring empty submission");
            return None;
        }
        if state.loading {
            tracing::debug!(session_id = %self.session_id, "Ignoring submission while a request is in flight");
            return None;
        }

        let id = state.next_id();
        state.conversation.push(Message::user(id, &prompt));
        state.draft.clear();
        state.loading = true;

        Some(prompt)
    }

    async fn complete(&self, prompt: String) -> Message {
        let _loading = LoadingGuard { session: self };

        let request = ChatRequest {
            user: self.user.clone(),
            prompt,
        };

        tracing::debug!(
            session_id = %self.session_id,
            mode = ?self.mode,
            "Sending prompt to backend"
        );

        let reply = match self.backend.send(self.mode, &request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(session_id = %self.session_id, "Backend request failed: {}", e);
                e.fallback_reply()
            }
        };

        self.append_reply(reply)
    }

    fn append_reply(&self, reply: ChatReply) -> Message {
        let mut state = self.lock();
        let id = state.next_id();
        let msg = Message::assistant(id, &reply.response, Some(reply.is_blocked));
        state.conversation.push(msg.clone());
        msg
    }
}

pub struct ChatSessionBuilder {
    mode: SessionMode,
    backend: Arc<dyn ChatBackend>,
    user: String,
    session_id: Option<String>,
}

impl ChatSessionBuilder {
    pub fn new(mode: SessionMode, backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            mode,
            backend,
            user: DEFAULT_USER.to_string(),
            session_id: None,
        }
    }

    /// The identifier sent with every prompt. Fixed for the life of
    /// the session.
    pub fn user(mut self, user: &str) -> Self {
        self.user = user.to_string();
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn build(self) -> ChatSession {
        let mut state = SessionState::default();
        let id = state.next_id();
        state
            .conversation
            .push(Message::assistant(id, &self.mode.greeting(), None));

        ChatSession {
            session_id: self
                .session_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            mode: self.mode,
            user: self.user,
            backend: self.backend,
            state: Mutex::new(state),
        }
    }
}
