//! Profile and dashboard commands.

use std::sync::Arc;

use tauri::State;

use crate::account;
use crate::core_state::CoreState;
use crate::error::to_ipc;
use crate::models::Profile;
use crate::wellness::{self, DashboardView};

#[tauri::command]
pub async fn get_profile(state: State<'_, Arc<CoreState>>) -> Result<Option<Profile>, String> {
    let creds = state.credentials().map_err(|e| to_ipc("get_profile", e))?;
    let client = state.backend().map_err(|e| to_ipc("get_profile", e))?;
    account::fetch_profile(client, &creds)
        .await
        .map_err(|e| to_ipc("get_profile", e))
}

/// Dashboard in the active language. A profile that cannot be loaded falls
/// back to the generic greeting instead of failing the whole screen.
#[tauri::command]
pub async fn get_dashboard(state: State<'_, Arc<CoreState>>) -> Result<DashboardView, String> {
    let profile = match (state.credentials(), state.backend()) {
        (Ok(creds), Ok(client)) => match account::fetch_profile(client, &creds).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "Profile unavailable for dashboard");
                None
            }
        },
        _ => None,
    };

    let view = wellness::dashboard(profile.as_ref(), state.language(), &mut rand::thread_rng());
    Ok(view)
}
