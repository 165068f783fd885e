//! The appointment record and booking-submission validation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::AppointmentId;
use super::status::AppointmentStatus;

/// The booking form's single validation message, shown to walk-in
/// customers in the shop's language.
pub const REQUIRED_FIELDS_MESSAGE: &str = "सभी फ़ील्ड भरें।";

/// Error returned when a booking submission fails validation.
///
/// All four fields share one localized message; the form is rejected as a
/// whole before any store contact happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{REQUIRED_FIELDS_MESSAGE}")]
    MissingFields,
}

/// A single booking record as read back from the record store.
///
/// `date` and `time` keep their fixed lexicographic string forms
/// (`YYYY-MM-DD`, `HH:MM`) so string ordering equals chronological
/// ordering. `created_at` is stamped by the store and never displayed;
/// it may still be unresolved on a freshly written document.
#[derive(Debug, Clone)]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub status: AppointmentStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated booking submission, ready to create.
///
/// Carries no `status` (every new appointment is `Booked`) and no
/// timestamp (the store assigns `createdAt`; it is never client-supplied).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewAppointment {
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}

impl NewAppointment {
    /// Validate raw booking-form values.
    ///
    /// Trims surrounding whitespace from `name` and `phone`; fails if any
    /// of the four fields is empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] with the localized
    /// message when any required field is empty.
    pub fn new(
        date: &str,
        time: &str,
        name: &str,
        phone: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        let phone = phone.trim();

        if date.is_empty() || time.is_empty() || name.is_empty() || phone.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self {
            date: date.to_owned(),
            time: time.to_owned(),
            name: name.to_owned(),
            phone: phone.to_owned(),
        })
    }
}
