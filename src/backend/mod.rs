//! Hosted backend collaborator: row storage and authentication.
//!
//! Speaks the PostgREST (`/rest/v1`) and GoTrue (`/auth/v1`) dialects used
//! by Supabase-style services. Every collection has a typed record; rows
//! are checked on read so the rest of the crate never handles untyped bags.

pub mod auth;
pub mod client;
pub mod query;

#[cfg(test)]
pub(crate) mod mock;

pub use auth::{AuthSession, AuthUser, Credentials, SignUpOutcome};
pub use client::BackendClient;
pub use query::{Order, Query};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Collections owned by the hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Profiles,
    MoodEntries,
    JournalEntries,
    CounselorBookings,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::MoodEntries => "mood_entries",
            Self::JournalEntries => "journal_entries",
            Self::CounselorBookings => "counselor_bookings",
        }
    }
}

/// A typed row of one collection.
pub trait Record: DeserializeOwned {
    const TABLE: Table;

    /// Content checks beyond what deserialization enforces.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend is not configured (set MANNMITRA_BACKEND_URL and MANNMITRA_BACKEND_ANON_KEY)")]
    NotConfigured,

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `message` is user-facing.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid record in {table}: {reason}")]
    InvalidRecord { table: &'static str, reason: String },

    #[error("Entity not found: {table} with id {id}")]
    NotFound { table: &'static str, id: String },
}

impl BackendError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
