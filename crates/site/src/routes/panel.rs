//! Admin panel route handlers.
//!
//! The panel is one page with an appointments table. Filtering re-renders
//! the whole table fragment; row actions (status change, delete) post per
//! row and never trigger a full re-query.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use classic_cuts_core::{
    Appointment, AppointmentFilter, AppointmentId, AppointmentStatus, StatusFilter,
};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::repos::AppointmentRepository;
use crate::state::AppState;

// =============================================================================
// Query and Form Types
// =============================================================================

/// Table filter query parameters.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(rename = "filter-date", default)]
    pub date: Option<String>,
    #[serde(rename = "filter-status", default)]
    pub status: Option<String>,
}

impl FilterQuery {
    fn into_filter(self) -> Result<AppointmentFilter, AppError> {
        let status = StatusFilter::parse(self.status.as_deref().unwrap_or(""))
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(AppointmentFilter {
            date: self.date,
            status,
        })
    }
}

/// Status change form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

// =============================================================================
// Templates
// =============================================================================

/// One table row.
pub struct AppointmentView {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl AppointmentView {
    /// Whether this row currently holds the given status name. Used by the
    /// template to mark the selected option.
    #[must_use]
    pub fn is_status(&self, status: &str) -> bool {
        self.status == status
    }
}

impl From<Appointment> for AppointmentView {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.into_inner(),
            name: appointment.name,
            phone: appointment.phone,
            date: appointment.date,
            time: appointment.time,
            status: appointment.status.to_string(),
        }
    }
}

/// Appointments table fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "panel/table.html")]
pub struct AppointmentsTable {
    pub appointments: Vec<AppointmentView>,
    pub statuses: [&'static str; 3],
}

impl AppointmentsTable {
    fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: appointments.into_iter().map(Into::into).collect(),
            statuses: AppointmentStatus::ALL.map(|s| s.as_str()),
        }
    }
}

/// Panel page template. Carries the initial, unfiltered table; the table
/// body itself is shared with [`AppointmentsTable`] via an include.
#[derive(Template, WebTemplate)]
#[template(path = "panel/index.html")]
pub struct PanelTemplate {
    pub admin_email: String,
    pub appointments: Vec<AppointmentView>,
    pub statuses: [&'static str; 3],
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the panel with the full appointments table.
#[instrument(skip(state, admin), fields(uid = %admin.0.uid))]
pub async fn panel_page(
    State(state): State<AppState>,
    admin: RequireAdminAuth,
) -> Result<PanelTemplate, AppError> {
    let repo = AppointmentRepository::new(state.store());
    let appointments = repo.list(&AppointmentFilter::all()).await?;

    Ok(PanelTemplate {
        admin_email: admin.0.email.to_string(),
        appointments: appointments.into_iter().map(Into::into).collect(),
        statuses: AppointmentStatus::ALL.map(|s| s.as_str()),
    })
}

/// Return the filtered appointments table fragment.
#[instrument(skip(state, _admin))]
pub async fn appointments_table(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Query(query): Query<FilterQuery>,
) -> Result<AppointmentsTable, AppError> {
    let filter = query.into_filter()?;
    let repo = AppointmentRepository::new(state.store());
    let appointments = repo.list(&filter).await?;

    Ok(AppointmentsTable::new(appointments))
}

/// Change one appointment's status.
///
/// Returns 204 on success; the row's selector already shows the chosen
/// value, so nothing is swapped in.
#[instrument(skip(state, _admin))]
pub async fn change_status(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<StatusCode, AppError> {
    let status: AppointmentStatus = form
        .status
        .parse()
        .map_err(|e: classic_cuts_core::StatusParseError| AppError::BadRequest(e.to_string()))?;

    let repo = AppointmentRepository::new(state.store());
    repo.set_status(&AppointmentId::new(id), status).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove one appointment.
///
/// Returns an empty 200 so the client swaps the row out without a
/// re-query.
#[instrument(skip(state, _admin))]
pub async fn delete_appointment(
    State(state): State<AppState>,
    _admin: RequireAdminAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AppointmentRepository::new(state.store());
    repo.remove(&AppointmentId::new(id)).await?;

    Ok(StatusCode::OK)
}
