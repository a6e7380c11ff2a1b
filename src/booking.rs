//! Counselor booking: the counselor directory, booking requests, and the
//! user's upcoming sessions.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, Credentials, Order, Query, Table};
use crate::error::{AppError, ValidationError};
use crate::models::{parse_slot_time, BookingStatus, CounselorBooking, NewCounselorBooking};

pub const MAX_NOTES_LEN: usize = 1000;

// ─── Directory ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Counselor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialization: &'static str,
    pub experience_years: u8,
    pub rating: f32,
    pub languages: &'static [&'static str],
    pub location: &'static str,
    /// Bookable `HH:MM` slots, earliest first.
    pub availability: &'static [&'static str],
    pub avatar: &'static str,
}

impl Counselor {
    pub fn has_slot(&self, time: &str) -> bool {
        self.availability.contains(&time)
    }
}

static COUNSELORS: [Counselor; 3] = [
    Counselor {
        id: "1",
        name: "Dr. Priya Sharma",
        specialization: "Student Counseling & Anxiety",
        experience_years: 8,
        rating: 4.9,
        languages: &["English", "Hindi"],
        location: "Delhi",
        availability: &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
        avatar: "👩‍⚕️",
    },
    Counselor {
        id: "2",
        name: "Dr. Rajesh Kumar",
        specialization: "Depression & Stress Management",
        experience_years: 12,
        rating: 4.8,
        languages: &["English", "Hindi", "Bengali"],
        location: "Mumbai",
        availability: &["10:00", "11:00", "12:00", "15:00", "16:00", "17:00"],
        avatar: "👨‍⚕️",
    },
    Counselor {
        id: "3",
        name: "Dr. Anjali Mehta",
        specialization: "Academic Pressure & Self-Esteem",
        experience_years: 6,
        rating: 4.9,
        languages: &["English", "Hindi", "Gujarati"],
        location: "Bangalore",
        availability: &["09:00", "10:00", "13:00", "14:00", "15:00", "18:00"],
        avatar: "👩‍💼",
    },
];

pub fn counselors() -> &'static [Counselor] {
    &COUNSELORS
}

pub fn find_counselor(id: &str) -> Option<&'static Counselor> {
    COUNSELORS.iter().find(|c| c.id == id)
}

// ─── Requests ─────────────────────────────────────────────────────────────────

/// Booking form. Unselected fields arrive as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub counselor_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub counselor: &'static Counselor,
    pub date: NaiveDate,
    pub time: String,
    pub notes: String,
}

/// Check a request against the directory. `today` bounds the earliest date.
pub fn validate_booking(request: &BookingRequest, today: NaiveDate) -> Result<ValidBooking, ValidationError> {
    let counselor_id = request.counselor_id.as_deref().map(str::trim).unwrap_or("");
    let time = request.time.as_deref().map(str::trim).unwrap_or("");
    let date = match request.date {
        Some(date) if !counselor_id.is_empty() && !time.is_empty() => date,
        _ => return Err(ValidationError::BookingFieldsRequired),
    };

    let counselor = find_counselor(counselor_id)
        .ok_or_else(|| ValidationError::UnknownCounselor(counselor_id.to_string()))?;

    if parse_slot_time(time).is_none() || !counselor.has_slot(time) {
        return Err(ValidationError::SlotUnavailable {
            counselor: counselor.name.to_string(),
            time: time.to_string(),
        });
    }
    if date < today {
        return Err(ValidationError::DateInPast);
    }

    let notes = request.notes.trim();
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(ValidationError::TooLong {
            field: "Notes",
            max: MAX_NOTES_LEN,
        });
    }

    Ok(ValidBooking {
        counselor,
        date,
        time: time.to_string(),
        notes: notes.to_string(),
    })
}

/// Human-readable confirmation, e.g.
/// "Your appointment with Dr. Priya Sharma is scheduled for Mon Mar 03 2025 at 10:00".
pub fn confirmation_message(booking: &CounselorBooking) -> String {
    format!(
        "Your appointment with {} is scheduled for {} at {}",
        booking.counselor_name,
        booking.appointment_date.format("%a %b %d %Y"),
        booking.appointment_time
    )
}

// ─── Storage ──────────────────────────────────────────────────────────────────

pub async fn book(
    client: &BackendClient,
    creds: &Credentials,
    request: &BookingRequest,
) -> Result<CounselorBooking, AppError> {
    let valid = validate_booking(request, Local::now().date_naive())?;
    let row = NewCounselorBooking {
        user_id: creds.user_id,
        counselor_name: valid.counselor.name.to_string(),
        appointment_date: valid.date,
        appointment_time: valid.time,
        notes: valid.notes,
        status: BookingStatus::Scheduled,
    };

    let booking: CounselorBooking = client.insert(&creds.access_token, &row).await?;
    tracing::info!(
        booking_id = %booking.id,
        counselor = valid.counselor.id,
        date = %booking.appointment_date,
        "Counselor session booked"
    );
    Ok(booking)
}

/// The user's bookings, soonest appointment first.
pub async fn list_bookings(
    client: &BackendClient,
    creds: &Credentials,
) -> Result<Vec<CounselorBooking>, AppError> {
    let query = Query::table(Table::CounselorBookings)
        .eq("user_id", creds.user_id)
        .order("appointment_date", Order::Ascending);
    Ok(client.select(&creds.access_token, &query).await?)
}
