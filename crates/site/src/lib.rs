//! Classic Cuts site library.
//!
//! This crate provides the site functionality as a library, allowing it to
//! be tested and reused. The binary in `main.rs` wires it to a socket.
//!
//! # Architecture
//!
//! All persistence and authentication are delegated to two managed
//! collaborators, consumed as black boxes:
//! - the record store (`store`) holding the `appointments` and `admins`
//!   collections
//! - the identity service (`identity`) issuing sign-in identities
//!
//! The site itself is pure orchestration: booking-form validation, admin
//! authorization gating, appointment querying, and table rendering.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
