//! Appointment status and the status filter sentinel.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a status string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid appointment status: {0}")]
pub struct StatusParseError(pub String);

/// Lifecycle status of an appointment.
///
/// Stored in the record store as the exact variant name ("Booked",
/// "Arrived", "Canceled"). Every new appointment starts as `Booked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AppointmentStatus {
    #[default]
    Booked,
    Arrived,
    Canceled,
}

impl AppointmentStatus {
    /// All statuses, in the order they appear in the panel's selector.
    pub const ALL: [Self; 3] = [Self::Booked, Self::Arrived, Self::Canceled];

    /// The status name as stored in the record store.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Arrived => "Arrived",
            Self::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Booked" => Ok(Self::Booked),
            "Arrived" => Ok(Self::Arrived),
            "Canceled" => Ok(Self::Canceled),
            _ => Err(StatusParseError(s.to_owned())),
        }
    }
}

/// Status selection for the panel's appointment query.
///
/// `All` is the sentinel meaning "no status filter"; the listing then
/// returns appointments in every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

impl StatusFilter {
    /// Parse a filter-control value.
    ///
    /// An empty value or the literal `all` selects [`StatusFilter::All`];
    /// anything else must be a valid status name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusParseError`] for unknown status names.
    pub fn parse(value: &str) -> Result<Self, StatusParseError> {
        match value {
            "" | "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }

    /// The status this filter narrows to, if any.
    #[must_use]
    pub const fn status(&self) -> Option<AppointmentStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }
}
