use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Mood;
use crate::backend::{Record, Table};

/// Row of the `mood_entries` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: Mood,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a mood check-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMoodEntry {
    pub user_id: Uuid,
    pub mood: Mood,
    pub notes: Option<String>,
}

impl Record for MoodEntry {
    const TABLE: Table = Table::MoodEntries;
}
