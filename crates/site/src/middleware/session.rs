//! Session middleware configuration.
//!
//! Sessions are in-memory (this system owns no database; the record store
//! holds only appointments and the admin registry) with strict settings:
//! SameSite=Strict, 24h inactivity expiry.

use tower_sessions::{Expiry, SessionManagerLayer};

use crate::config::SiteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "classic_cuts_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer.
#[must_use]
pub fn create_session_layer(
    config: &SiteConfig,
) -> SessionManagerLayer<tower_sessions::MemoryStore> {
    let store = tower_sessions::MemoryStore::default();

    // Secure cookies whenever the site is served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
