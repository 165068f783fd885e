//! Site services.

pub mod auth;

pub use auth::{AuthEvent, AuthGate, AuthGateError, AuthState};
