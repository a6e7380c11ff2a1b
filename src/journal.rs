//! Daily journal: entry drafts, storage, and client-side search.
//!
//! Drafts arrive from the editor as raw form text; tags are a single
//! comma-separated string. Entries are always scoped to the signed-in user,
//! so an update or delete can never touch another user's rows.

use serde::Deserialize;
use uuid::Uuid;

use crate::backend::{BackendClient, BackendError, Credentials, Order, Query, Table};
use crate::error::{AppError, ValidationError};
use crate::models::{JournalEntry, Mood, NewJournalEntry};

// ═══════════════════════════════════════════
// Drafts
// ═══════════════════════════════════════════

/// Editor contents. `id` is set when editing an existing entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalDraft {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Comma-separated, e.g. `"gratitude, family"`.
    #[serde(default)]
    pub tags: String,
}

/// Split comma-separated tag text, trimming each tag and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Inverse of `parse_tags`, used to prefill the editor.
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Check a draft and build the row to store for `user_id`.
pub fn validate_draft(draft: &JournalDraft, user_id: Uuid) -> Result<NewJournalEntry, ValidationError> {
    let title = draft.title.trim();
    let content = draft.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(ValidationError::JournalFieldsRequired);
    }

    Ok(NewJournalEntry {
        user_id,
        title: title.to_string(),
        content: content.to_string(),
        mood: draft.mood,
        tags: parse_tags(&draft.tags),
    })
}

// ═══════════════════════════════════════════
// Storage
// ═══════════════════════════════════════════

fn own_entry(creds: &Credentials, id: Uuid) -> Query {
    Query::table(Table::JournalEntries)
        .eq("id", id)
        .eq("user_id", creds.user_id)
}

/// Create the entry, or update it when the draft carries an id.
pub async fn save_entry(
    client: &BackendClient,
    creds: &Credentials,
    draft: &JournalDraft,
) -> Result<JournalEntry, AppError> {
    let row = validate_draft(draft, creds.user_id)?;

    match draft.id {
        None => {
            let entry: JournalEntry = client.insert(&creds.access_token, &row).await?;
            tracing::info!(entry_id = %entry.id, tags = entry.tags.len(), "Journal entry saved");
            Ok(entry)
        }
        Some(id) => {
            let updated: Vec<JournalEntry> = client
                .update(&creds.access_token, &own_entry(creds, id), &row)
                .await?;
            let entry = updated.into_iter().next().ok_or_else(|| BackendError::NotFound {
                table: Table::JournalEntries.as_str(),
                id: id.to_string(),
            })?;
            tracing::info!(entry_id = %entry.id, "Journal entry updated");
            Ok(entry)
        }
    }
}

/// The user's entries, newest first.
pub async fn list_entries(
    client: &BackendClient,
    creds: &Credentials,
) -> Result<Vec<JournalEntry>, AppError> {
    let query = Query::table(Table::JournalEntries)
        .eq("user_id", creds.user_id)
        .order("created_at", Order::Descending);
    Ok(client.select(&creds.access_token, &query).await?)
}

pub async fn delete_entry(
    client: &BackendClient,
    creds: &Credentials,
    id: Option<Uuid>,
) -> Result<(), AppError> {
    let id = id.ok_or(ValidationError::IdRequired("Entry"))?;
    client.delete(&creds.access_token, &own_entry(creds, id)).await?;
    tracing::info!(entry_id = %id, "Journal entry deleted");
    Ok(())
}

// ═══════════════════════════════════════════
// Search
// ═══════════════════════════════════════════

/// Case-insensitive match on title, content, or any tag.
pub fn matches(entry: &JournalEntry, term: &str) -> bool {
    let term = term.to_lowercase();
    entry.title.to_lowercase().contains(&term)
        || entry.content.to_lowercase().contains(&term)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
}

/// Keep the entries matching `term`, preserving order. A blank term keeps all.
pub fn filter_entries(entries: Vec<JournalEntry>, term: &str) -> Vec<JournalEntry> {
    let term = term.trim();
    if term.is_empty() {
        return entries;
    }
    entries.into_iter().filter(|e| matches(e, term)).collect()
}
