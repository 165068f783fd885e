//! Unified error handling for the site.
//!
//! Login and booking failures are rendered inline by their templates, so
//! only the panel's data paths produce an `AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::repos::RepositoryError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log store failures with Sentry
        if matches!(self, Self::Repository(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Site request error"
            );
        }

        let status = match &self {
            Self::Repository(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Store failures are surfaced verbatim so the admin panel can show
        // the collaborator's own message.
        (status, self.to_string()).into_response()
    }
}
