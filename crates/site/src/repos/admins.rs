//! Admin registry: authorization by document existence.
//!
//! A signed-in identity is an admin if and only if the `admins` collection
//! holds a document whose ID equals the identity's UID. The document's
//! content is never read. Registry documents are provisioned out-of-band
//! by the CLI; the site only checks existence.

use classic_cuts_core::AdminUid;

use crate::store::RecordStore;

use super::RepositoryError;

/// Collection holding the authorized-admin registry.
pub const COLLECTION: &str = "admins";

/// Read-only view of the admin registry.
pub struct AdminRegistry<'a> {
    store: &'a RecordStore,
}

impl<'a> AdminRegistry<'a> {
    /// Create a new registry view.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Whether this UID is listed in the registry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the lookup itself fails;
    /// absence is `Ok(false)`, not an error.
    pub async fn is_admin(&self, uid: &AdminUid) -> Result<bool, RepositoryError> {
        let document = self.store.get(COLLECTION, uid.as_str()).await?;
        Ok(document.is_some())
    }
}
