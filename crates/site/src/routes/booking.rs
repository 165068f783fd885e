//! Booking route handlers.
//!
//! The public booking form. Submissions are validated, then written to the
//! appointments collection with a server-assigned ID and creation time.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tracing::instrument;

use classic_cuts_core::{NewAppointment, REQUIRED_FIELDS_MESSAGE};

use crate::filters;
use crate::repos::AppointmentRepository;
use crate::state::AppState;

/// Booking form data.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(rename = "appoint-date", default)]
    pub date: String,
    #[serde(rename = "appoint-time", default)]
    pub time: String,
    #[serde(rename = "customer-name", default)]
    pub name: String,
    #[serde(rename = "customer-phone", default)]
    pub phone: String,
}

/// Outcome notice shown above the form after a submission.
pub struct Notice {
    pub success: bool,
    pub message: String,
}

/// Booking page template.
#[derive(Template, WebTemplate)]
#[template(path = "booking/book.html")]
pub struct BookingTemplate {
    pub notice: Option<Notice>,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}

impl BookingTemplate {
    fn empty() -> Self {
        Self {
            notice: None,
            date: String::new(),
            time: String::new(),
            name: String::new(),
            phone: String::new(),
        }
    }

    fn retained(form: BookingForm, message: String) -> Self {
        Self {
            notice: Some(Notice {
                success: false,
                message,
            }),
            date: form.date,
            time: form.time,
            name: form.name,
            phone: form.phone,
        }
    }
}

/// Display the booking form.
pub async fn book_page() -> BookingTemplate {
    BookingTemplate::empty()
}

/// Handle a booking submission.
///
/// A successful booking resets the form; a failed one keeps the entered
/// values so the customer can correct and resubmit.
#[instrument(skip(state, form))]
pub async fn book(State(state): State<AppState>, Form(form): Form<BookingForm>) -> BookingTemplate {
    let appointment =
        match NewAppointment::new(&form.date, &form.time, &form.name, &form.phone) {
            Ok(appointment) => appointment,
            Err(_) => {
                return BookingTemplate::retained(form, REQUIRED_FIELDS_MESSAGE.to_string());
            }
        };

    let repo = AppointmentRepository::new(state.store());
    match repo.create(&appointment).await {
        Ok(id) => {
            tracing::info!(appointment_id = %id, date = %appointment.date, "Appointment booked");
            BookingTemplate {
                notice: Some(Notice {
                    success: true,
                    message: "Appointment booked successfully!".to_string(),
                }),
                ..BookingTemplate::empty()
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Booking failed");
            BookingTemplate::retained(form, format!("Error booking appointment: {e}"))
        }
    }
}
