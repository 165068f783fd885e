//! Authorization gate for the admin panel.
//!
//! Sign-in only proves *identity*; panel access additionally requires the
//! UID to exist in the admin registry. The gate is an explicit state
//! machine driven by discrete events, so the whole authorization decision
//! is testable without a real identity provider:
//!
//! ```text
//! SignedIn(identity), registry hit   -> Authorized(CurrentAdmin)
//! SignedIn(identity), registry miss  -> forced sign-out, Unauthorized
//! SignedOut                          -> LoggedOut
//! ```
//!
//! The registry lookup resolves *before* any `Authorized` state is
//! produced, so an unauthorized identity can never reach the panel view,
//! even momentarily.

use thiserror::Error;

use classic_cuts_core::Email;

use crate::identity::{Identity, IdentityError, IdentityService};
use crate::repos::{AdminRegistry, RepositoryError};
use crate::store::RecordStore;

/// Rejection notice shown when a signed-in identity is not in the registry.
pub const NOT_ADMIN_MESSAGE: &str =
    "This account is not registered as admin. Contact owner to add you in admins collection.";

/// Errors from the authorization gate itself (not rejections).
#[derive(Debug, Error)]
pub enum AuthGateError {
    /// Identity service call failed.
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Registry lookup failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Discrete auth events, one per sign-in or sign-out.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// The identity collaborator verified a credential pair.
    SignedIn(Identity),
    /// The admin ended their session.
    SignedOut,
}

/// Authorization state after an event. Exactly one of the login view
/// (`LoggedOut`, `Unauthorized`) or the panel view (`Authorized`) follows
/// from each state.
#[derive(Debug, Clone)]
pub enum AuthState {
    /// No identity; show the login view.
    LoggedOut,
    /// A verified identity that is not in the registry. It has been
    /// forcibly signed out; show the login view with a rejection notice.
    Unauthorized {
        /// The rejected identity's email, for the notice.
        email: Email,
    },
    /// A verified identity present in the registry; show the panel view.
    Authorized(crate::models::CurrentAdmin),
}

/// The authorization gate.
pub struct AuthGate<'a> {
    registry: AdminRegistry<'a>,
    identity: &'a IdentityService,
}

impl<'a> AuthGate<'a> {
    /// Create a gate over the shared collaborators.
    #[must_use]
    pub const fn new(store: &'a RecordStore, identity: &'a IdentityService) -> Self {
        Self {
            registry: AdminRegistry::new(store),
            identity,
        }
    }

    /// Advance the state machine by one event.
    ///
    /// On `SignedIn`, the registry is consulted before any state is
    /// produced; a miss forces a sign-out at the identity collaborator
    /// and yields `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGateError`] if the registry lookup or the forced
    /// sign-out fails. A failed event never yields `Authorized`.
    pub async fn on_event(&self, event: AuthEvent) -> Result<AuthState, AuthGateError> {
        match event {
            AuthEvent::SignedOut => Ok(AuthState::LoggedOut),
            AuthEvent::SignedIn(identity) => {
                if self.registry.is_admin(&identity.uid).await? {
                    Ok(AuthState::Authorized(crate::models::CurrentAdmin {
                        uid: identity.uid,
                        email: identity.email,
                    }))
                } else {
                    self.identity.sign_out(&identity.uid).await?;
                    Ok(AuthState::Unauthorized {
                        email: identity.email,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::identity::MemoryIdentity;
    use crate::repos::admins;
    use crate::store::MemoryStore;

    async fn signed_in(identity_service: &MemoryIdentity, email: &str) -> Identity {
        let email = Email::parse(email).unwrap();
        identity_service
            .create_account(&email, "hunter2!")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_registered_identity_is_authorized() {
        let store = RecordStore::Memory(MemoryStore::new());
        let memory_identity = MemoryIdentity::new();
        let identity = signed_in(&memory_identity, "owner@shop.example").await;
        store
            .set(admins::COLLECTION, identity.uid.as_str(), &serde_json::json!({}))
            .await
            .unwrap();

        let service = IdentityService::Memory(memory_identity.clone());
        let gate = AuthGate::new(&store, &service);
        let state = gate
            .on_event(AuthEvent::SignedIn(identity.clone()))
            .await
            .unwrap();

        match state {
            AuthState::Authorized(admin) => {
                assert_eq!(admin.uid, identity.uid);
                assert_eq!(admin.email, identity.email);
            }
            other => panic!("expected Authorized, got {other:?}"),
        }
        assert!(
            !memory_identity.was_signed_out(&identity.uid).await,
            "authorized identities stay signed in"
        );
    }

    #[tokio::test]
    async fn test_unregistered_identity_is_forced_out() {
        let store = RecordStore::Memory(MemoryStore::new());
        let memory_identity = MemoryIdentity::new();
        let identity = signed_in(&memory_identity, "stranger@shop.example").await;

        let service = IdentityService::Memory(memory_identity.clone());
        let gate = AuthGate::new(&store, &service);
        let state = gate
            .on_event(AuthEvent::SignedIn(identity.clone()))
            .await
            .unwrap();

        assert!(
            matches!(state, AuthState::Unauthorized { ref email } if *email == identity.email),
            "registry miss must never authorize"
        );
        assert!(
            memory_identity.was_signed_out(&identity.uid).await,
            "registry miss forces sign-out at the identity collaborator"
        );
    }

    #[tokio::test]
    async fn test_signed_out_event_returns_to_logged_out() {
        let store = RecordStore::Memory(MemoryStore::new());
        let service = IdentityService::Memory(MemoryIdentity::new());
        let gate = AuthGate::new(&store, &service);

        let state = gate.on_event(AuthEvent::SignedOut).await.unwrap();
        assert!(matches!(state, AuthState::LoggedOut));
    }
}
