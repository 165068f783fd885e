//! Panel filter selections for the appointment listing.

use super::status::StatusFilter;

/// Optional exact-match filters applied to the appointment query.
///
/// The listing order is fixed at (date ascending, time ascending) no matter
/// which filters are set; these only narrow the result set. The default
/// filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    /// Exact calendar-date match (`YYYY-MM-DD`). `None` or empty means no
    /// date constraint.
    pub date: Option<String>,
    /// Status selection; [`StatusFilter::All`] means no status constraint.
    pub status: StatusFilter,
}

impl AppointmentFilter {
    /// A filter that matches every appointment.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// The effective date clause, treating an empty string as absent.
    #[must_use]
    pub fn date_clause(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::status::AppointmentStatus;

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = AppointmentFilter::all();
        assert_eq!(filter.date_clause(), None);
        assert_eq!(filter.status.status(), None);
    }

    #[test]
    fn test_empty_date_is_no_clause() {
        let filter = AppointmentFilter {
            date: Some(String::new()),
            status: StatusFilter::All,
        };
        assert_eq!(filter.date_clause(), None);
    }

    #[test]
    fn test_set_filters_produce_clauses() {
        let filter = AppointmentFilter {
            date: Some("2024-05-01".to_owned()),
            status: StatusFilter::Only(AppointmentStatus::Arrived),
        };
        assert_eq!(filter.date_clause(), Some("2024-05-01"));
        assert_eq!(filter.status.status(), Some(AppointmentStatus::Arrived));
    }
}
