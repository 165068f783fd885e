//! Record store collaborator (managed document database).
//!
//! The store owns all persistence: it assigns document IDs, stamps a
//! `createdAt` timestamp on every new document server-side, evaluates
//! equality filters, and returns query results already ordered. Nothing in
//! this crate caches or re-sorts what the store returns.
//!
//! Two backends sit behind [`RecordStore`]:
//! - [`StoreClient`] - the production JSON/REST client
//! - [`MemoryStore`] - an in-process store with the same semantics, used by
//!   tests and the integration suite

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::StoreClient;

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Document or collection not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API key rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The store rejected the operation; the message is surfaced to the
    /// user verbatim.
    #[error("{0}")]
    Rejected(String),
}

/// A document as returned by the store: its assigned ID plus a JSON object
/// of fields.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    /// Read a string field, if present and a string.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// An exact-match clause for a query.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldEquals {
    pub field: String,
    pub equals: Value,
}

impl FieldEquals {
    /// Build an equality clause.
    pub fn new(field: impl Into<String>, equals: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }
}

/// The record store collaborator.
///
/// An enum rather than a trait object so the production client and the
/// in-memory substitute share one concrete type that can live in
/// application state.
#[derive(Clone)]
pub enum RecordStore {
    Rest(StoreClient),
    Memory(MemoryStore),
}

impl RecordStore {
    /// Create a document; the store assigns the ID and stamps `createdAt`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the write. No partial
    /// record remains on failure.
    pub async fn create(&self, collection: &str, fields: &Value) -> Result<String, StoreError> {
        match self {
            Self::Rest(client) => client.create(collection, fields).await,
            Self::Memory(store) => store.create(collection, fields).await,
        }
    }

    /// Query a collection with equality filters, ordered by the given
    /// fields ascending. Returns the full matching set; no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the query fails; errors are propagated to
    /// the caller uncaught.
    pub async fn query(
        &self,
        collection: &str,
        order_by: &[&str],
        filters: &[FieldEquals],
    ) -> Result<Vec<Document>, StoreError> {
        match self {
            Self::Rest(client) => client.query(collection, order_by, filters).await,
            Self::Memory(store) => store.query(collection, order_by, filters).await,
        }
    }

    /// Write a document at a caller-chosen ID, replacing any existing
    /// content. Only used for out-of-band provisioning of the admin
    /// registry, whose documents are keyed by identity UID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the write.
    pub async fn set(&self, collection: &str, id: &str, fields: &Value) -> Result<(), StoreError> {
        match self {
            Self::Rest(client) => client.set(collection, id, fields).await,
            Self::Memory(store) => store.set(collection, id, fields).await,
        }
    }

    /// Merge the given fields into an existing document, leaving the rest
    /// of the document untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the document does not exist, or
    /// another [`StoreError`] if the store rejects the update.
    pub async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<(), StoreError> {
        match self {
            Self::Rest(client) => client.update_fields(collection, id, fields).await,
            Self::Memory(store) => store.update_fields(collection, id, fields).await,
        }
    }

    /// Delete a document by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the delete.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        match self {
            Self::Rest(client) => client.delete(collection, id).await,
            Self::Memory(store) => store.delete(collection, id).await,
        }
    }

    /// Fetch a single document, `None` if absent. Used for existence
    /// checks against the admin registry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for failures other than absence.
    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        match self {
            Self::Rest(client) => client.get(collection, id).await,
            Self::Memory(store) => store.get(collection, id).await,
        }
    }
}
