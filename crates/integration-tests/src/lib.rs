//! Integration tests for Classic Cuts.
//!
//! # Test Categories
//!
//! - `booking_flow` - Booking and appointment lifecycle against in-memory
//!   collaborators
//! - `admin_auth` - Authorization gate scenarios against in-memory
//!   collaborators
//! - `site_live` - HTTP smoke tests against a running site (ignored by
//!   default)
//!
//! # Running the Live Tests
//!
//! ```bash
//! # Start the site, then:
//! cargo test -p classic-cuts-integration-tests -- --ignored
//! ```

/// Base URL for the site under test (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("CLASSIC_CUTS_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
