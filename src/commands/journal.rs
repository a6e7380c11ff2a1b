//! Daily journal IPC commands.
//!
//! - `save_journal_entry`: create, or update when the draft has an id
//! - `list_journal_entries`: newest first
//! - `search_journal_entries`: list, then filter on title/content/tags
//! - `delete_journal_entry`: by id, scoped to the signed-in user

use std::sync::Arc;

use tauri::State;
use uuid::Uuid;

use crate::core_state::CoreState;
use crate::error::to_ipc;
use crate::journal::{self, JournalDraft};
use crate::models::JournalEntry;

#[tauri::command]
pub async fn save_journal_entry(
    draft: JournalDraft,
    state: State<'_, Arc<CoreState>>,
) -> Result<JournalEntry, String> {
    let creds = state.credentials().map_err(|e| to_ipc("save_journal_entry", e))?;
    let client = state.backend().map_err(|e| to_ipc("save_journal_entry", e))?;
    journal::save_entry(client, &creds, &draft)
        .await
        .map_err(|e| to_ipc("save_journal_entry", e))
}

#[tauri::command]
pub async fn list_journal_entries(state: State<'_, Arc<CoreState>>) -> Result<Vec<JournalEntry>, String> {
    let creds = state.credentials().map_err(|e| to_ipc("list_journal_entries", e))?;
    let client = state.backend().map_err(|e| to_ipc("list_journal_entries", e))?;
    journal::list_entries(client, &creds)
        .await
        .map_err(|e| to_ipc("list_journal_entries", e))
}

#[tauri::command]
pub async fn search_journal_entries(
    term: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<Vec<JournalEntry>, String> {
    let creds = state.credentials().map_err(|e| to_ipc("search_journal_entries", e))?;
    let client = state.backend().map_err(|e| to_ipc("search_journal_entries", e))?;
    let entries = journal::list_entries(client, &creds)
        .await
        .map_err(|e| to_ipc("search_journal_entries", e))?;
    Ok(journal::filter_entries(entries, &term))
}

#[tauri::command]
pub async fn delete_journal_entry(
    entry_id: Option<String>,
    state: State<'_, Arc<CoreState>>,
) -> Result<(), String> {
    let id = entry_id
        .filter(|id| !id.trim().is_empty())
        .map(|id| Uuid::parse_str(id.trim()))
        .transpose()
        .map_err(|e| format!("Invalid entry ID: {e}"))?;

    let creds = state.credentials().map_err(|e| to_ipc("delete_journal_entry", e))?;
    let client = state.backend().map_err(|e| to_ipc("delete_journal_entry", e))?;
    journal::delete_entry(client, &creds, id)
        .await
        .map_err(|e| to_ipc("delete_journal_entry", e))
}
