//! Account commands: sign-up, sign-in, sign-out, current user.
//!
//! Tokens stay in `CoreState`; only the `AuthUser` crosses IPC.

use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::account::{self, SignInForm, SignUpForm};
use crate::backend::AuthUser;
use crate::core_state::CoreState;
use crate::error::to_ipc;

#[derive(Debug, Clone, Serialize)]
pub struct SignUpResult {
    pub user: AuthUser,
    /// False when the account still needs email confirmation.
    pub signed_in: bool,
}

#[tauri::command]
pub async fn sign_up(form: SignUpForm, state: State<'_, Arc<CoreState>>) -> Result<SignUpResult, String> {
    let client = state.backend().map_err(|e| to_ipc("sign_up", e))?;
    let outcome = account::sign_up(client, &form)
        .await
        .map_err(|e| to_ipc("sign_up", e))?;

    let signed_in = outcome.session.is_some();
    if let Some(session) = outcome.session {
        state.set_session(session).map_err(|e| to_ipc("sign_up", e))?;
    }
    Ok(SignUpResult {
        user: outcome.user,
        signed_in,
    })
}

#[tauri::command]
pub async fn sign_in(form: SignInForm, state: State<'_, Arc<CoreState>>) -> Result<AuthUser, String> {
    let client = state.backend().map_err(|e| to_ipc("sign_in", e))?;
    let session = account::sign_in(client, &form)
        .await
        .map_err(|e| to_ipc("sign_in", e))?;

    let user = session.user.clone();
    state.set_session(session).map_err(|e| to_ipc("sign_in", e))?;
    Ok(user)
}

/// Clears the local session first; a failed remote logout is only logged.
#[tauri::command]
pub async fn sign_out(state: State<'_, Arc<CoreState>>) -> Result<(), String> {
    let session = state.clear_session().map_err(|e| to_ipc("sign_out", e))?;
    let Some(session) = session else {
        return Ok(());
    };

    if let Ok(client) = state.backend() {
        if let Err(e) = client.sign_out(&session.access_token).await {
            tracing::warn!(error = %e, "Remote sign-out failed; local session cleared anyway");
        }
    }
    tracing::info!(user_id = %session.user.id, "Signed out");
    Ok(())
}

#[tauri::command]
pub fn get_current_user(state: State<'_, Arc<CoreState>>) -> Result<Option<AuthUser>, String> {
    state.current_user().map_err(|e| to_ipc("get_current_user", e))
}
