//! Mood check-in: the five-mood catalogue and mood entry storage.

use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, Credentials, Order, Query, Table};
use crate::error::{AppError, ValidationError};
use crate::models::{Mood, MoodEntry, NewMoodEntry};

pub const MAX_NOTES_LEN: usize = 1000;

/// How many entries the check-in screen shows by default.
pub const DEFAULT_HISTORY_LIMIT: u32 = 30;

/// One selectable mood with its supportive tips.
#[derive(Debug, Clone, Serialize)]
pub struct MoodOption {
    pub mood: Mood,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub tips: [&'static str; 3],
}

static OPTIONS: [MoodOption; 5] = [
    MoodOption {
        mood: Mood::Great,
        label: "Great",
        emoji: "😊",
        description: "Feeling amazing and energetic!",
        tips: [
            "Keep up the great energy!",
            "Share your joy with others",
            "Document what made today special",
        ],
    },
    MoodOption {
        mood: Mood::Good,
        label: "Good",
        emoji: "🙂",
        description: "Pretty good overall",
        tips: [
            "Maintain this positive momentum",
            "Try a gratitude practice",
            "Connect with a friend",
        ],
    },
    MoodOption {
        mood: Mood::Okay,
        label: "Okay",
        emoji: "😐",
        description: "Neutral, neither good nor bad",
        tips: [
            "Take a mindful walk",
            "Listen to calming music",
            "Practice deep breathing",
        ],
    },
    MoodOption {
        mood: Mood::Low,
        label: "Low",
        emoji: "😔",
        description: "Not feeling my best",
        tips: [
            "Be gentle with yourself",
            "Try a 5-minute meditation",
            "Reach out to someone you trust",
        ],
    },
    MoodOption {
        mood: Mood::Difficult,
        label: "Struggling",
        emoji: "😢",
        description: "Having a tough time",
        tips: [
            "You're not alone in this",
            "Consider talking to a counselor",
            "Focus on small, manageable steps",
        ],
    },
];

pub fn options() -> &'static [MoodOption] {
    &OPTIONS
}

pub fn option(mood: Mood) -> &'static MoodOption {
    // OPTIONS follows Mood::ALL order.
    &OPTIONS[Mood::ALL.iter().position(|m| *m == mood).unwrap_or(0)]
}

/// A submitted check-in. `mood` is `None` until the user picks one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckIn {
    pub mood: Option<Mood>,
    #[serde(default)]
    pub notes: String,
}

/// Validate a check-in, returning the mood and the trimmed notes (if any).
pub fn validate_check_in(check_in: &CheckIn) -> Result<(Mood, Option<String>), ValidationError> {
    let mood = check_in.mood.ok_or(ValidationError::MoodRequired)?;
    let notes = check_in.notes.trim();
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(ValidationError::TooLong {
            field: "Notes",
            max: MAX_NOTES_LEN,
        });
    }
    let notes = (!notes.is_empty()).then(|| notes.to_string());
    Ok((mood, notes))
}

pub async fn record(
    client: &BackendClient,
    creds: &Credentials,
    check_in: &CheckIn,
) -> Result<MoodEntry, AppError> {
    let (mood, notes) = validate_check_in(check_in)?;
    let row = NewMoodEntry {
        user_id: creds.user_id,
        mood,
        notes,
    };
    let entry: MoodEntry = client.insert(&creds.access_token, &row).await?;
    tracing::info!(entry_id = %entry.id, mood = mood.as_str(), "Mood logged");
    Ok(entry)
}

/// The user's entries, newest first.
pub async fn list_entries(
    client: &BackendClient,
    creds: &Credentials,
    limit: Option<u32>,
) -> Result<Vec<MoodEntry>, AppError> {
    let query = Query::table(Table::MoodEntries)
        .eq("user_id", creds.user_id)
        .order("created_at", Order::Descending)
        .limit(limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
    Ok(client.select(&creds.access_token, &query).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use serde_json::json;
    use uuid::Uuid;

    fn creds() -> Credentials {
        Credentials {
            access_token: "jwt".into(),
            user_id: Uuid::parse_str("0b2d9a4e-2f1c-4b5d-8e7f-9a0b1c2d3e4f").unwrap(),
        }
    }

    #[test]
    fn catalogue_covers_every_mood_in_order() {
        let moods: Vec<Mood> = options().iter().map(|o| o.mood).collect();
        assert_eq!(moods, Mood::ALL.to_vec());
        for mood in Mood::ALL {
            let opt = option(mood);
            assert_eq!(opt.mood, mood);
            assert_eq!(opt.emoji, mood.emoji());
            assert!(opt.tips.iter().all(|t| !t.is_empty()));
        }
        assert_eq!(option(Mood::Difficult).label, "Struggling");
    }

    #[test]
    fn check_in_requires_mood() {
        let err = validate_check_in(&CheckIn::default()).unwrap_err();
        assert_eq!(err, ValidationError::MoodRequired);
    }

    #[test]
    fn check_in_notes_are_optional_and_bounded() {
        let (mood, notes) = validate_check_in(&CheckIn {
            mood: Some(Mood::Low),
            notes: "   ".into(),
        })
        .unwrap();
        assert_eq!(mood, Mood::Low);
        assert!(notes.is_none());

        let (_, notes) = validate_check_in(&CheckIn {
            mood: Some(Mood::Good),
            notes: " slept well ".into(),
        })
        .unwrap();
        assert_eq!(notes.as_deref(), Some("slept well"));

        let err = validate_check_in(&CheckIn {
            mood: Some(Mood::Good),
            notes: "x".repeat(MAX_NOTES_LEN + 1),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Notes must be 1000 characters or fewer");
    }

    #[tokio::test]
    async fn record_inserts_row_for_user() {
        let server = MockBackend::start(vec![(
            "POST",
            "/rest/v1/mood_entries",
            201,
            json!([{
                "id": "8f14e45f-ceea-4e1a-9a6f-1c2d3e4f5a6b",
                "user_id": "0b2d9a4e-2f1c-4b5d-8e7f-9a0b1c2d3e4f",
                "mood": "okay",
                "notes": null,
                "created_at": "2025-03-01T09:00:00Z"
            }]),
        )])
        .await;
        let client = BackendClient::new(&server.url, "anon", 5).unwrap();

        let entry = record(
            &client,
            &creds(),
            &CheckIn {
                mood: Some(Mood::Okay),
                notes: String::new(),
            },
        )
        .await
        .unwrap();
        assert_eq!(entry.mood, Mood::Okay);

        let body: serde_json::Value = serde_json::from_str(&server.last_request().body).unwrap();
        assert_eq!(
            body,
            json!({
                "user_id": "0b2d9a4e-2f1c-4b5d-8e7f-9a0b1c2d3e4f",
                "mood": "okay",
                "notes": null
            })
        );
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let server =
            MockBackend::start(vec![("GET", "/rest/v1/mood_entries", 200, json!([]))]).await;
        let client = BackendClient::new(&server.url, "anon", 5).unwrap();

        let entries = list_entries(&client, &creds(), Some(7)).await.unwrap();
        assert!(entries.is_empty());

        let req = server.last_request();
        assert_eq!(
            req.query_value("user_id"),
            Some("eq.0b2d9a4e-2f1c-4b5d-8e7f-9a0b1c2d3e4f")
        );
        assert_eq!(req.query_value("order"), Some("created_at.desc"));
        assert_eq!(req.query_value("limit"), Some("7"));
    }
}
