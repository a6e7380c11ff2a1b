use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::error::to_ipc;
use crate::models::MoodEntry;
use crate::mood::{self, CheckIn, MoodOption};

#[tauri::command]
pub fn get_mood_options() -> Vec<MoodOption> {
    mood::options().to_vec()
}

#[tauri::command]
pub async fn record_mood(check_in: CheckIn, state: State<'_, Arc<CoreState>>) -> Result<MoodEntry, String> {
    let creds = state.credentials().map_err(|e| to_ipc("record_mood", e))?;
    let client = state.backend().map_err(|e| to_ipc("record_mood", e))?;
    mood::record(client, &creds, &check_in)
        .await
        .map_err(|e| to_ipc("record_mood", e))
}

/// Recent check-ins, newest first.
#[tauri::command]
pub async fn list_mood_entries(
    limit: Option<u32>,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<MoodEntry>, String> {
    let creds = state.credentials().map_err(|e| to_ipc("list_mood_entries", e))?;
    let client = state.backend().map_err(|e| to_ipc("list_mood_entries", e))?;
    mood::list_entries(client, &creds, limit)
        .await
        .map_err(|e| to_ipc("list_mood_entries", e))
}
