//! Authentication middleware and extractors.
//!
//! Provides the extractor that gates every panel route on an authorized
//! session. The session only ever contains a [`CurrentAdmin`] that passed
//! the registry lookup in [`crate::services::auth`].

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires an authorized admin session.
///
/// Page requests without one are redirected to the login view; row-action
/// requests (under `/admin/appointments`) get a plain 401 so the panel can
/// surface it as a notice instead of swapping in the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn panel_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

/// Error returned when admin authentication is required but missing.
pub enum AdminAuthRejection {
    /// Redirect to the login view (for page requests).
    RedirectToLogin,
    /// Unauthorized response (for row-action requests).
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Session is placed in extensions by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let admin: CurrentAdmin = session
            .get(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten()
            .ok_or_else(|| {
                // Nesting strips the /admin prefix from parts.uri, so the
                // original URI decides whether this is a row action
                let is_row_action = parts
                    .extensions
                    .get::<OriginalUri>()
                    .is_some_and(|uri| uri.path().starts_with("/admin/appointments"));
                if is_row_action {
                    AdminAuthRejection::Unauthorized
                } else {
                    AdminAuthRejection::RedirectToLogin
                }
            })?;

        Ok(Self(admin))
    }
}

/// Store the current admin in the session after authorization.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
