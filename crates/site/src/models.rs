//! Session-stored types.

use serde::{Deserialize, Serialize};

use classic_cuts_core::{AdminUid, Email};

/// Session-stored admin identity.
///
/// Minimal data kept in the session to identify the logged-in admin. Only
/// written after the registry lookup has resolved affirmatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Identity UID; also the admin registry document ID.
    pub uid: AdminUid,
    /// Admin's email address, shown in the panel header.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
