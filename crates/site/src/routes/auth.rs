//! Admin authentication route handlers.
//!
//! Login verifies the credential pair with the identity collaborator, then
//! runs the result through the authorization gate. Only a gate decision of
//! `Authorized` ever puts an admin into the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use classic_cuts_core::Email;

use crate::filters;
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, session_keys};
use crate::services::{AuthEvent, AuthGate, AuthState};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "admin-email", default)]
    pub email: String,
    #[serde(rename = "admin-password", default)]
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Display the login page.
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: None,
        email: String::new(),
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return LoginTemplate {
                error: Some(format!("SignIn error: {e}")),
                email: form.email,
            }
            .into_response();
        }
    };

    let identity = match state.identity().sign_in(&email, &form.password).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(email = %email, error = %e, "Sign-in rejected");
            return LoginTemplate {
                error: Some(format!("SignIn error: {e}")),
                email: form.email,
            }
            .into_response();
        }
    };

    let gate = AuthGate::new(state.store(), state.identity());
    match gate.on_event(AuthEvent::SignedIn(identity)).await {
        Ok(AuthState::Authorized(admin)) => {
            if let Err(e) = set_current_admin(&session, &admin).await {
                tracing::error!(error = %e, "Failed to write admin session");
                return LoginTemplate {
                    error: Some(format!("SignIn error: {e}")),
                    email: form.email,
                }
                .into_response();
            }
            tracing::info!(uid = %admin.uid, "Admin signed in");
            Redirect::to("/admin").into_response()
        }
        Ok(AuthState::Unauthorized { email }) => {
            tracing::warn!(email = %email, "Identity not in admin registry");
            LoginTemplate {
                error: Some(crate::services::auth::NOT_ADMIN_MESSAGE.to_string()),
                email: email.to_string(),
            }
            .into_response()
        }
        // SignedIn never yields LoggedOut; treat it like a gate failure.
        Ok(AuthState::LoggedOut) => LoginTemplate {
            error: Some("SignIn error: authorization check failed".to_string()),
            email: form.email,
        }
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Authorization gate failed");
            LoginTemplate {
                error: Some(format!("SignIn error: {e}")),
                email: form.email,
            }
            .into_response()
        }
    }
}

/// Handle logout.
///
/// Clears the session and revokes the identity server-side. The revocation
/// is best effort; the local session is gone either way.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Redirect {
    let admin: Option<CurrentAdmin> = session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten();

    if let Err(e) = clear_current_admin(&session).await {
        tracing::warn!(error = %e, "Failed to clear admin session");
    }

    if let Some(admin) = admin {
        if let Err(e) = state.identity().sign_out(&admin.uid).await {
            tracing::warn!(uid = %admin.uid, error = %e, "Identity sign-out failed");
        }
    }

    Redirect::to("/admin/login")
}
