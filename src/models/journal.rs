use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::enums::Mood;
use crate::backend::{Record, Table};

/// Row of the `journal_entries` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert/update payload. `user_id` is always sent so an update can never
/// move an entry to another owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewJournalEntry {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Option<Mood>,
    pub tags: Vec<String>,
}

impl Record for JournalEntry {
    const TABLE: Table = Table::JournalEntries;

    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err(format!("entry {} has a blank title", self.id));
        }
        if self.content.trim().is_empty() {
            return Err(format!("entry {} has blank content", self.id));
        }
        Ok(())
    }
}

/// `tags` is a nullable array column.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
