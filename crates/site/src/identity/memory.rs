//! In-process identity service for tests and the integration suite.
//!
//! Keeps accounts in a map and records every sign-out, so tests can assert
//! that the authorization gate actually forced a non-admin identity out.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use classic_cuts_core::{AdminUid, Email};

use super::{Identity, IdentityError};

#[derive(Debug, Clone)]
struct Account {
    uid: AdminUid,
    password: String,
}

/// In-memory identity service.
#[derive(Clone, Default)]
pub struct MemoryIdentity {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    signed_out: Arc<RwLock<HashSet<String>>>,
}

impl MemoryIdentity {
    /// Create an empty identity service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `sign_out` was called for this UID. Test hook.
    pub async fn was_signed_out(&self, uid: &AdminUid) -> bool {
        self.signed_out.read().await.contains(uid.as_str())
    }

    pub async fn create_account(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email.as_str()) {
            return Err(IdentityError::AccountExists);
        }

        let account = Account {
            uid: AdminUid::new(Uuid::new_v4().to_string()),
            password: password.to_owned(),
        };
        let identity = Identity {
            uid: account.uid.clone(),
            email: email.clone(),
        };
        accounts.insert(email.as_str().to_owned(), account);
        Ok(identity)
    }

    pub async fn sign_in(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(email.as_str())
            .filter(|account| account.password == password)
            .ok_or(IdentityError::InvalidCredentials)?;

        Ok(Identity {
            uid: account.uid.clone(),
            email: email.clone(),
        })
    }

    pub async fn sign_out(&self, uid: &AdminUid) -> Result<(), IdentityError> {
        self.signed_out
            .write()
            .await
            .insert(uid.as_str().to_owned());
        Ok(())
    }
}
