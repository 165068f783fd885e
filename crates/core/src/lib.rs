//! Classic Cuts Core - Shared types library.
//!
//! This crate provides common types used across all Classic Cuts components:
//! - `site` - Public booking pages and the admin panel
//! - `cli` - Command-line tool for admin provisioning
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! collaborator access. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the appointment model, statuses, and filters

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
