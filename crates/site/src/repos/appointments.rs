//! Appointment repository: create, filtered listing, status updates,
//! deletion.
//!
//! The listing always orders by (date, time) ascending regardless of
//! filters, so the panel shows a stable chronological queue. Filters are
//! exact-match only and evaluated by the store; this module does no
//! post-processing of the result set.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use classic_cuts_core::{
    Appointment, AppointmentFilter, AppointmentId, AppointmentStatus, NewAppointment,
};

use crate::store::{Document, FieldEquals, RecordStore};

use super::RepositoryError;

/// Collection holding booking records.
pub const COLLECTION: &str = "appointments";

/// Fixed listing order: date ascending, then time ascending.
const ORDER_BY: [&str; 2] = ["date", "time"];

/// Repository for appointment records.
pub struct AppointmentRepository<'a> {
    store: &'a RecordStore,
}

impl<'a> AppointmentRepository<'a> {
    /// Create a new appointment repository.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Create a booking record.
    ///
    /// Every new appointment is written with `status = Booked`; the store
    /// assigns the ID and stamps `createdAt`. Validation has already
    /// happened in [`NewAppointment::new`], so this only fails if the
    /// store rejects the write - in which case no record remains.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the create call fails.
    pub async fn create(
        &self,
        appointment: &NewAppointment,
    ) -> Result<AppointmentId, RepositoryError> {
        let mut fields = serde_json::to_value(appointment)
            .map_err(|e| RepositoryError::DataCorruption(e.to_string()))?;
        fields["status"] = Value::String(AppointmentStatus::Booked.as_str().to_owned());

        let id = self.store.create(COLLECTION, &fields).await?;
        Ok(AppointmentId::new(id))
    }

    /// List appointments matching the filter, ordered by (date, time)
    /// ascending. Returns the full matching set; store errors propagate
    /// to the caller uncaught.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails, or
    /// `RepositoryError::DataCorruption` if a document is missing a
    /// required field or carries an unknown status.
    pub async fn list(
        &self,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, RepositoryError> {
        let mut clauses = Vec::new();
        if let Some(date) = filter.date_clause() {
            clauses.push(FieldEquals::new("date", date));
        }
        if let Some(status) = filter.status.status() {
            clauses.push(FieldEquals::new("status", status.as_str()));
        }

        let documents = self.store.query(COLLECTION, &ORDER_BY, &clauses).await?;
        documents.into_iter().map(parse_appointment).collect()
    }

    /// Update only the `status` field of one record; everything else is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the update is rejected.
    pub async fn set_status(
        &self,
        id: &AppointmentId,
        status: AppointmentStatus,
    ) -> Result<(), RepositoryError> {
        self.store
            .update_fields(COLLECTION, id.as_str(), &json!({ "status": status.as_str() }))
            .await?;
        Ok(())
    }

    /// Delete one record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the delete is rejected.
    pub async fn remove(&self, id: &AppointmentId) -> Result<(), RepositoryError> {
        self.store.delete(COLLECTION, id.as_str()).await?;
        Ok(())
    }
}

fn parse_appointment(document: Document) -> Result<Appointment, RepositoryError> {
    let required = |field: &str| -> Result<String, RepositoryError> {
        document
            .str_field(field)
            .map(ToOwned::to_owned)
            .ok_or_else(|| {
                RepositoryError::DataCorruption(format!(
                    "appointment {} is missing field '{field}'",
                    document.id
                ))
            })
    };

    let status: AppointmentStatus = required("status")?.parse().map_err(|e| {
        RepositoryError::DataCorruption(format!("appointment {}: {e}", document.id))
    })?;

    // A serverTimestamp may still be unresolved on a document read back
    // immediately after creation; treat it as absent rather than corrupt.
    let created_at = document
        .str_field("createdAt")
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc));

    Ok(Appointment {
        date: required("date")?,
        time: required("time")?,
        name: required("name")?,
        phone: required("phone")?,
        status,
        created_at,
        id: AppointmentId::new(document.id),
    })
}
