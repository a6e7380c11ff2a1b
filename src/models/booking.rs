use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::BookingStatus;
use crate::backend::{Record, Table};

/// Row of the `counselor_bookings` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounselorBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub counselor_name: String,
    pub appointment_date: NaiveDate,
    /// `HH:MM`, or `HH:MM:SS` as returned by a SQL `time` column.
    pub appointment_time: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCounselorBooking {
    pub user_id: Uuid,
    pub counselor_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub notes: String,
    pub status: BookingStatus,
}

/// Parse a slot time in either `HH:MM` or `HH:MM:SS` form.
pub fn parse_slot_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

impl Record for CounselorBooking {
    const TABLE: Table = Table::CounselorBookings;

    fn validate(&self) -> Result<(), String> {
        if self.counselor_name.trim().is_empty() {
            return Err(format!("booking {} has no counselor name", self.id));
        }
        if parse_slot_time(&self.appointment_time).is_none() {
            return Err(format!(
                "booking {} has malformed time {:?}",
                self.id, self.appointment_time
            ));
        }
        Ok(())
    }
}
