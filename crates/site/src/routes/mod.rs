//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (shop info and services)
//! GET  /health                 - Health check
//!
//! # Booking
//! GET  /book                   - Booking form
//! POST /book                   - Submit a booking
//!
//! # Admin auth
//! GET  /admin/login            - Login page
//! POST /admin/login            - Login action
//! POST /admin/logout           - Logout action
//!
//! # Admin panel (requires auth)
//! GET  /admin                  - Panel page with the appointments table
//! GET  /admin/appointments     - Appointments table fragment (HTMX)
//! POST /admin/appointments/{id}/status - Change a row's status
//! POST /admin/appointments/{id}/delete - Remove a row
//! ```

pub mod auth;
pub mod booking;
pub mod home;
pub mod panel;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the booking routes router.
pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/book", get(booking::book_page).post(booking::book))
}

/// Create the admin routes router (auth and panel).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(panel::panel_page))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/appointments", get(panel::appointments_table))
        .route("/appointments/{id}/status", post(panel::change_status))
        .route("/appointments/{id}/delete", post(panel::delete_appointment))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .merge(booking_routes())
        .nest("/admin", admin_routes())
}
