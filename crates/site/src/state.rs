//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::identity::{IdentityClient, IdentityError, IdentityService};
use crate::store::{RecordStore, StoreClient, StoreError};

/// Error building the application state's collaborator clients.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("store client: {0}")]
    Store(#[from] StoreError),
    #[error("identity client: {0}")]
    Identity(#[from] IdentityError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the record store and identity collaborators.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: RecordStore,
    identity: IdentityService,
}

impl AppState {
    /// Create a new application state with REST collaborators built from
    /// the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either collaborator client cannot be built,
    /// which only happens for unencodable API keys.
    pub fn new(config: SiteConfig) -> Result<Self, StateError> {
        let store = RecordStore::Rest(StoreClient::new(&config.store)?);
        let identity = IdentityService::Rest(IdentityClient::new(&config.identity)?);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                identity,
            }),
        })
    }

    /// Create an application state over explicit collaborators.
    ///
    /// Used by tests to run the full router against in-memory fakes.
    #[must_use]
    pub fn with_collaborators(
        config: SiteConfig,
        store: RecordStore,
        identity: IdentityService,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                identity,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    /// Get a reference to the identity service.
    #[must_use]
    pub fn identity(&self) -> &IdentityService {
        &self.inner.identity
    }
}
