//! Core types for Classic Cuts.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod appointment;
pub mod email;
pub mod filter;
pub mod id;
pub mod status;

pub use appointment::{Appointment, NewAppointment, REQUIRED_FIELDS_MESSAGE, ValidationError};
pub use email::{Email, EmailError};
pub use filter::AppointmentFilter;
pub use id::*;
pub use status::{AppointmentStatus, StatusFilter, StatusParseError};
