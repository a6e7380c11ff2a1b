//! Application state shared by every IPC command.
//!
//! Holds the active language, the signed-in session, open chat sessions and
//! the hosted backend client. Wrapped in `Arc` at startup and handed to
//! Tauri as managed state. Locks are never held across `.await`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, RwLock};
use std::time::Duration;

use uuid::Uuid;

use crate::backend::{AuthSession, AuthUser, BackendClient, BackendError, Credentials};
use crate::chat::{ChatError, ChatMessage, ChatSession};
use crate::config::AppConfig;
use crate::i18n::Language;

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    config: AppConfig,
    /// `None` when the backend URL or key is not configured.
    backend: Option<BackendClient>,
    language: RwLock<Language>,
    /// Signed-in session. `None` when signed out.
    auth: RwLock<Option<AuthSession>>,
    chats: Mutex<HashMap<Uuid, ChatSession>>,
}

impl CoreState {
    pub fn new(config: AppConfig) -> Self {
        let backend = match BackendClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(BackendError::NotConfigured) => {
                tracing::warn!("Backend URL or anon key not configured, account features disabled");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to build backend client");
                None
            }
        };

        Self {
            language: RwLock::new(config.default_language),
            config,
            backend,
            auth: RwLock::new(None),
            chats: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn backend(&self) -> Result<&BackendClient, CoreError> {
        self.backend.as_ref().ok_or(CoreError::NotConfigured)
    }

    // ── Language ────────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language.read().map(|guard| *guard).unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) -> Result<(), CoreError> {
        let mut guard = self.language.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = language;
        tracing::debug!(language = %language, "Language set");
        Ok(())
    }

    /// Flip en ⇄ hi and return the new tag.
    pub fn toggle_language(&self) -> Result<Language, CoreError> {
        let mut guard = self.language.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = guard.toggled();
        tracing::debug!(language = %*guard, "Language toggled");
        Ok(*guard)
    }

    // ── Auth session ────────────────────────────────────────

    pub fn set_session(&self, session: AuthSession) -> Result<(), CoreError> {
        let mut guard = self.auth.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(session);
        Ok(())
    }

    /// Drop the session, returning it so the caller can revoke the token.
    pub fn clear_session(&self) -> Result<Option<AuthSession>, CoreError> {
        let mut guard = self.auth.write().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.take())
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    pub fn current_user(&self) -> Result<Option<AuthUser>, CoreError> {
        let guard = self.auth.read().map_err(|_| CoreError::LockPoisoned)?;
        Ok(guard.as_ref().map(|session| session.user.clone()))
    }

    /// Token and user id for row-level calls. Fails when signed out.
    pub fn credentials(&self) -> Result<Credentials, CoreError> {
        let guard = self.auth.read().map_err(|_| CoreError::LockPoisoned)?;
        guard
            .as_ref()
            .map(AuthSession::credentials)
            .ok_or(CoreError::NotSignedIn)
    }

    // ── Chat sessions ───────────────────────────────────────

    fn lock_chats(&self) -> Result<MutexGuard<'_, HashMap<Uuid, ChatSession>>, CoreError> {
        self.chats.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Open a chat session and return its id with the seeded transcript.
    pub fn open_chat(&self) -> Result<(Uuid, Vec<ChatMessage>), CoreError> {
        let session = ChatSession::open(Duration::from_millis(self.config.typing_delay_ms));
        let id = session.id();
        let messages = session.messages();
        self.lock_chats()?.insert(id, session);
        tracing::debug!(session_id = %id, "Chat session opened");
        Ok((id, messages))
    }

    /// Run `f` against an open chat session.
    pub fn with_chat<T>(
        &self,
        session_id: &Uuid,
        f: impl FnOnce(&mut ChatSession) -> Result<T, ChatError>,
    ) -> Result<T, CoreError> {
        let mut chats = self.lock_chats()?;
        let session = chats
            .get_mut(session_id)
            .ok_or_else(|| ChatError::SessionNotFound(session_id.to_string()))?;
        Ok(f(session)?)
    }

    /// Close a chat session. Closing an unknown id is a no-op.
    pub fn close_chat(&self, session_id: &Uuid) -> Result<bool, CoreError> {
        let removed = self.lock_chats()?.remove(session_id);
        let closed = removed.is_some();
        if let Some(session) = removed {
            session.close();
            tracing::debug!(session_id = %session_id, "Chat session closed");
        }
        Ok(closed)
    }

    pub fn open_chat_count(&self) -> usize {
        self.chats.lock().map(|chats| chats.len()).unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Please sign in to continue")]
    NotSignedIn,
    #[error("Backend is not configured")]
    NotConfigured,
    #[error(transparent)]
    Chat(#[from] ChatError),
}
