use std::sync::Arc;

use serde::Serialize;
use tauri::State;

use crate::booking::{self, BookingRequest, Counselor};
use crate::core_state::CoreState;
use crate::error::to_ipc;
use crate::models::CounselorBooking;

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub booking: CounselorBooking,
    pub message: String,
}

#[tauri::command]
pub fn list_counselors() -> Vec<Counselor> {
    booking::counselors().to_vec()
}

#[tauri::command]
pub async fn book_counselor(
    request: BookingRequest,
    state: State<'_, Arc<CoreState>>,
) -> Result<BookingConfirmation, String> {
    let creds = state.credentials().map_err(|e| to_ipc("book_counselor", e))?;
    let client = state.backend().map_err(|e| to_ipc("book_counselor", e))?;
    let booking = booking::book(client, &creds, &request)
        .await
        .map_err(|e| to_ipc("book_counselor", e))?;

    let message = booking::confirmation_message(&booking);
    Ok(BookingConfirmation { booking, message })
}

/// The user's bookings, soonest first.
#[tauri::command]
pub async fn list_bookings(state: State<'_, Arc<CoreState>>) -> Result<Vec<CounselorBooking>, String> {
    let creds = state.credentials().map_err(|e| to_ipc("list_bookings", e))?;
    let client = state.backend().map_err(|e| to_ipc("list_bookings", e))?;
    booking::list_bookings(client, &creds)
        .await
        .map_err(|e| to_ipc("list_bookings", e))
}
