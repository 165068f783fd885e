//! Admin registry management commands.
//!
//! Admin access is two things: an identity at the identity provider, and a
//! document keyed by that identity's UID in the `admins` collection. These
//! commands manage both.
//!
//! # Environment Variables
//!
//! Uses the same variables as the site itself (`STORE_API_URL`,
//! `STORE_API_KEY`, `IDENTITY_API_URL`, `IDENTITY_API_KEY`).

use thiserror::Error;

use classic_cuts_core::{AdminUid, Email, EmailError};
use classic_cuts_site::config::{ConfigError, SiteConfig};
use classic_cuts_site::identity::IdentityError;
use classic_cuts_site::repos::admins;
use classic_cuts_site::state::{AppState, StateError};
use classic_cuts_site::store::StoreError;

/// Errors that can occur during admin registry operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Identity provider rejected the request.
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Record store rejected the request.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Collaborator clients could not be built.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Create a new identity and register it as admin.
///
/// # Returns
///
/// The UID of the created identity.
pub async fn create(email: &str, password: &str) -> Result<AdminUid, AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email)?;
    let state = load_state()?;

    tracing::info!("Creating identity: {}", email);
    let identity = state.identity().create_account(&email, password).await?;

    register(&state, &identity.uid, &email).await?;

    tracing::info!(
        "Admin created successfully! UID: {}, Email: {}",
        identity.uid,
        email
    );

    Ok(identity.uid)
}

/// Register an existing identity as admin.
pub async fn grant(uid: &str, email: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email)?;
    let uid = AdminUid::new(uid);
    let state = load_state()?;

    register(&state, &uid, &email).await?;

    tracing::info!("Admin registered: UID {}, Email {}", uid, email);
    Ok(())
}

/// Remove an identity from the admin registry.
///
/// The identity itself is left in place; it just loses panel access.
pub async fn revoke(uid: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let state = load_state()?;

    state.store().delete(admins::COLLECTION, uid).await?;

    tracing::info!("Admin revoked: UID {}", uid);
    Ok(())
}

fn load_state() -> Result<AppState, AdminError> {
    let config = SiteConfig::from_env()?;
    Ok(AppState::new(config)?)
}

async fn register(state: &AppState, uid: &AdminUid, email: &Email) -> Result<(), StoreError> {
    state
        .store()
        .set(
            admins::COLLECTION,
            uid.as_str(),
            &serde_json::json!({ "email": email.to_string() }),
        )
        .await
}
