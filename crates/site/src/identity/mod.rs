//! Identity collaborator (managed auth backend).
//!
//! Issues identities for email/password accounts. The site never stores
//! passwords; session issuance and credential verification belong entirely
//! to this collaborator. The admin *authorization* decision is separate:
//! a signed-in identity still has to appear in the record store's `admins`
//! collection (see [`crate::services::auth`]).

mod memory;
mod rest;

pub use memory::MemoryIdentity;
pub use rest::IdentityClient;

use classic_cuts_core::{AdminUid, Email};
use thiserror::Error;

/// Errors that can occur when talking to the identity service.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Email/password pair rejected.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("An account already exists for this email")]
    AccountExists,

    /// Any other rejection from the identity service.
    #[error("{0}")]
    Rejected(String),
}

/// A signed-in identity as issued by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Opaque UID; the admin registry is keyed on this value.
    pub uid: AdminUid,
    pub email: Email,
}

/// The identity collaborator, REST in production and in-memory in tests.
#[derive(Clone)]
pub enum IdentityService {
    Rest(IdentityClient),
    Memory(MemoryIdentity),
}

impl IdentityService {
    /// Create a new email/password account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::AccountExists`] for duplicate emails, or
    /// another [`IdentityError`] if the service rejects the request.
    pub async fn create_account(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        match self {
            Self::Rest(client) => client.create_account(email, password).await,
            Self::Memory(service) => service.create_account(email, password).await,
        }
    }

    /// Verify an email/password pair and return the identity.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] if the pair is
    /// rejected.
    pub async fn sign_in(&self, email: &Email, password: &str) -> Result<Identity, IdentityError> {
        match self {
            Self::Rest(client) => client.sign_in(email, password).await,
            Self::Memory(service) => service.sign_in(email, password).await,
        }
    }

    /// Revoke the identity's session server-side. Used both for normal
    /// logout and for the forced sign-out of non-admin identities.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if the service rejects the revocation.
    pub async fn sign_out(&self, uid: &AdminUid) -> Result<(), IdentityError> {
        match self {
            Self::Rest(client) => client.sign_out(uid).await,
            Self::Memory(service) => service.sign_out(uid).await,
        }
    }
}
