//! Companion chat: message types and per-view chat sessions.
//!
//! A `ChatSession` lives exactly as long as the chat view that opened it.
//! Each user message schedules one companion reply after a short typing
//! delay; closing or dropping the session aborts every reply still waiting,
//! so nothing is appended or emitted once the view is gone.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::companion::{self, CompanionReply};
use crate::models::MessageRole;

// ═══════════════════════════════════════════
// Types
// ═══════════════════════════════════════════

/// One chat bubble. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Per-session sequence number; higher means created later.
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Payload of the `chat-reply` Tauri event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReplyEvent {
    pub session_id: String,
    pub message: ChatMessage,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Chat session not found: {0}")]
    SessionNotFound(String),
}

// ═══════════════════════════════════════════
// Transcript
// ═══════════════════════════════════════════

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    fn push(&mut self, role: MessageRole, content: String, suggestions: Option<Vec<String>>) -> ChatMessage {
        self.next_id += 1;
        let message = ChatMessage {
            id: self.next_id,
            role,
            content,
            created_at: Utc::now(),
            suggestions,
        };
        self.messages.push(message.clone());
        message
    }

    fn push_reply(&mut self, reply: CompanionReply) -> ChatMessage {
        self.push(MessageRole::Assistant, reply.text, Some(reply.suggestions))
    }
}

/// The transcript is append-only, so a poisoned lock still holds valid data.
fn lock(transcript: &Mutex<Transcript>) -> MutexGuard<'_, Transcript> {
    transcript.lock().unwrap_or_else(PoisonError::into_inner)
}

// ═══════════════════════════════════════════
// Session
// ═══════════════════════════════════════════

pub struct ChatSession {
    id: Uuid,
    transcript: Arc<Mutex<Transcript>>,
    pending: Vec<JoinHandle<()>>,
    typing_delay: Duration,
}

impl ChatSession {
    /// New session seeded with the companion greeting.
    pub fn open(typing_delay: Duration) -> Self {
        let mut transcript = Transcript::default();
        transcript.push_reply(companion::greeting());

        Self {
            id: Uuid::new_v4(),
            transcript: Arc::new(Mutex::new(transcript)),
            pending: Vec::new(),
            typing_delay,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.transcript).messages.clone()
    }

    /// True while at least one reply is still waiting out its delay.
    pub fn is_typing(&self) -> bool {
        self.pending.iter().any(|handle| !handle.is_finished())
    }

    /// Record a user message and schedule the companion's reply.
    ///
    /// Blank text is rejected before anything is recorded. `on_reply` runs
    /// once the reply has been appended, unless the session is closed first.
    /// Must be called from within a tokio runtime.
    pub fn send<F>(&mut self, text: &str, on_reply: F) -> Result<ChatMessage, ChatError>
    where
        F: FnOnce(ChatMessage) + Send + 'static,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let sent = lock(&self.transcript).push(MessageRole::User, text.to_string(), None);

        self.pending.retain(|handle| !handle.is_finished());

        let transcript = Arc::clone(&self.transcript);
        let delay = self.typing_delay;
        let prompt = text.to_string();
        let session_id = self.id;
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // No await past this point: an abort either lands before the
            // reply is appended or not at all.
            let reply = companion::select_reply(&prompt);
            tracing::debug!(%session_id, category = ?reply.category, "Companion reply ready");
            let message = lock(&transcript).push_reply(reply);
            on_reply(message);
        }));

        Ok(sent)
    }

    /// Tear the session down, cancelling pending replies.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        let cancelled = self
            .pending
            .drain(..)
            .filter(|handle| !handle.is_finished())
            .map(|handle| handle.abort())
            .count();
        if cancelled > 0 {
            tracing::debug!(session_id = %self.id, cancelled, "Cancelled pending chat replies");
        }
    }
}
