//! Domain repositories over the record store.
//!
//! Each repository borrows the shared [`RecordStore`](crate::store::RecordStore)
//! and translates between domain types and store documents. Two collections
//! are consumed:
//!
//! - `appointments` - booking records, created by the public flow and
//!   listed/mutated/deleted by the admin panel
//! - `admins` - the authorization registry, existence-check only

pub mod admins;
pub mod appointments;

pub use admins::AdminRegistry;
pub use appointments::AppointmentRepository;

use thiserror::Error;

use crate::store::StoreError;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store operation itself failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A document came back in a shape the domain types cannot hold.
    #[error("Data corruption: {0}")]
    DataCorruption(String),
}
