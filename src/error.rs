//! Crate-level errors.
//!
//! `ValidationError` display strings are shown to the user as-is, so each
//! variant names the one condition that blocked the action.

use thiserror::Error;

use crate::backend::BackendError;
use crate::chat::ChatError;
use crate::core_state::CoreError;

/// Form checks that run before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Please select how you are feeling")]
    MoodRequired,
    #[error("{field} must be {max} characters or fewer")]
    TooLong { field: &'static str, max: usize },
    #[error("Title and content are required")]
    JournalFieldsRequired,
    #[error("Please select date, time, and counselor")]
    BookingFieldsRequired,
    #[error("Unknown counselor: {0}")]
    UnknownCounselor(String),
    #[error("{counselor} is not available at {time}")]
    SlotUnavailable { counselor: String, time: String },
    #[error("Appointments can only be booked for upcoming dates")]
    DateInPast,
    #[error("{0} ID is required")]
    IdRequired(&'static str),
}

/// Everything a command can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// Validation failures are expected user input; everything else is logged.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Chat(ChatError::EmptyMessage)
                | Self::Core(CoreError::Chat(ChatError::EmptyMessage) | CoreError::NotSignedIn)
        )
    }
}

/// Convert to the IPC error string, logging anything unexpected.
pub fn to_ipc(action: &str, err: impl Into<AppError>) -> String {
    let err = err.into();
    if err.is_user_error() {
        tracing::debug!(action, error = %err, "Action blocked by validation");
    } else {
        tracing::warn!(action, error = %err, "Action failed");
    }
    err.to_string()
}
