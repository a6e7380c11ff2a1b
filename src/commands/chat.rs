//! Companion chat IPC commands.
//!
//! The frontend opens a session when the chat view mounts and closes it on
//! unmount. Replies arrive as `chat-reply` events after the typing delay.

use std::sync::Arc;

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use uuid::Uuid;

use crate::chat::{ChatMessage, ChatReplyEvent};
use crate::core_state::CoreState;
use crate::error::to_ipc;

pub const CHAT_REPLY_EVENT: &str = "chat-reply";

#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

fn parse_session_id(session_id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(session_id).map_err(|e| format!("Invalid chat session ID: {e}"))
}

#[tauri::command]
pub fn open_chat(state: State<'_, Arc<CoreState>>) -> Result<ChatSnapshot, String> {
    let (id, messages) = state.open_chat().map_err(|e| to_ipc("open_chat", e))?;
    Ok(ChatSnapshot {
        session_id: id.to_string(),
        messages,
        typing: false,
    })
}

/// Record the user's message and schedule the reply. Returns the stored
/// user message; the reply is emitted later as a `chat-reply` event.
///
/// Async so the reply timer is spawned on the Tauri tokio runtime.
#[tauri::command]
pub async fn send_chat_message(
    session_id: String,
    text: String,
    state: State<'_, Arc<CoreState>>,
    app: AppHandle,
) -> Result<ChatMessage, String> {
    let id = parse_session_id(&session_id)?;

    state
        .with_chat(&id, |chat| {
            chat.send(&text, move |message| {
                let event = ChatReplyEvent {
                    session_id,
                    message,
                };
                if let Err(e) = app.emit(CHAT_REPLY_EVENT, &event) {
                    tracing::warn!(error = %e, "Failed to emit chat reply");
                }
            })
        })
        .map_err(|e| to_ipc("send_chat_message", e))
}

#[tauri::command]
pub fn get_chat_messages(
    session_id: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<ChatSnapshot, String> {
    let id = parse_session_id(&session_id)?;
    let (messages, typing) = state
        .with_chat(&id, |chat| Ok((chat.messages(), chat.is_typing())))
        .map_err(|e| to_ipc("get_chat_messages", e))?;
    Ok(ChatSnapshot {
        session_id,
        messages,
        typing,
    })
}

/// Tear down the session; any reply still waiting is cancelled.
#[tauri::command]
pub fn close_chat(session_id: String, state: State<'_, Arc<CoreState>>) -> Result<bool, String> {
    let id = parse_session_id(&session_id)?;
    state.close_chat(&id).map_err(|e| to_ipc("close_chat", e))
}
