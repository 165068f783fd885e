//! Booking and appointment lifecycle tests.
//!
//! These run the repositories against in-memory collaborators, exercising
//! the same code paths the handlers use without a live record store.

use classic_cuts_core::{
    AppointmentFilter, AppointmentStatus, NewAppointment, StatusFilter, ValidationError,
};
use classic_cuts_site::repos::AppointmentRepository;
use classic_cuts_site::store::{MemoryStore, RecordStore};

fn store() -> RecordStore {
    RecordStore::Memory(MemoryStore::new())
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_booking_rejects_blank_fields() {
    for (date, time, name, phone) in [
        ("", "10:00", "Ravi", "9990001111"),
        ("2024-05-01", "", "Ravi", "9990001111"),
        ("2024-05-01", "10:00", "", "9990001111"),
        ("2024-05-01", "10:00", "Ravi", ""),
        ("2024-05-01", "10:00", "   ", "9990001111"),
    ] {
        let result = NewAppointment::new(date, time, name, phone);
        assert!(
            matches!(result, Err(ValidationError::MissingFields)),
            "({date:?}, {time:?}, {name:?}, {phone:?}) must be rejected"
        );
    }
}

#[test]
fn test_booking_trims_name_and_phone() {
    let appointment = NewAppointment::new("2024-05-01", "10:00", "  Ravi ", " 9990001111 ").unwrap();
    assert_eq!(appointment.name, "Ravi");
    assert_eq!(appointment.phone, "9990001111");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_rejected_booking_leaves_no_record() {
    let store = store();
    let repo = AppointmentRepository::new(&store);

    assert!(NewAppointment::new("2024-05-01", "", "Ravi", "9990001111").is_err());

    let listed = repo.list(&AppointmentFilter::all()).await.unwrap();
    assert!(listed.is_empty(), "validation failure writes nothing");
}

#[tokio::test]
async fn test_booked_appointment_round_trip() {
    let store = store();
    let repo = AppointmentRepository::new(&store);

    let id = repo
        .create(&NewAppointment::new("2024-05-01", "10:00", "Ravi", "9990001111").unwrap())
        .await
        .unwrap();

    let listed = repo.list(&AppointmentFilter::all()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].name, "Ravi");
    assert_eq!(listed[0].status, AppointmentStatus::Booked);
    assert!(listed[0].created_at.is_some());
}

#[tokio::test]
async fn test_status_change_then_delete() {
    let store = store();
    let repo = AppointmentRepository::new(&store);

    let id = repo
        .create(&NewAppointment::new("2024-05-01", "10:00", "Ravi", "9990001111").unwrap())
        .await
        .unwrap();

    repo.set_status(&id, AppointmentStatus::Canceled)
        .await
        .unwrap();

    let canceled = repo
        .list(&AppointmentFilter {
            date: None,
            status: StatusFilter::Only(AppointmentStatus::Canceled),
        })
        .await
        .unwrap();
    assert_eq!(canceled.len(), 1);
    assert_eq!(canceled[0].id, id);

    repo.remove(&id).await.unwrap();
    let remaining = repo.list(&AppointmentFilter::all()).await.unwrap();
    assert!(remaining.is_empty());
}

// =============================================================================
// Filtering
// =============================================================================

#[tokio::test]
async fn test_date_and_status_filters_compose() {
    let store = store();
    let repo = AppointmentRepository::new(&store);

    let monday = repo
        .create(&NewAppointment::new("2024-05-06", "10:00", "Ravi", "9990001111").unwrap())
        .await
        .unwrap();
    let tuesday = repo
        .create(&NewAppointment::new("2024-05-07", "10:00", "Sunil", "9990002222").unwrap())
        .await
        .unwrap();
    repo.set_status(&tuesday, AppointmentStatus::Arrived)
        .await
        .unwrap();

    // Date alone
    let monday_only = repo
        .list(&AppointmentFilter {
            date: Some("2024-05-06".to_string()),
            status: StatusFilter::All,
        })
        .await
        .unwrap();
    assert_eq!(monday_only.len(), 1);
    assert_eq!(monday_only[0].id, monday);

    // Date and status together
    let tuesday_arrived = repo
        .list(&AppointmentFilter {
            date: Some("2024-05-07".to_string()),
            status: StatusFilter::Only(AppointmentStatus::Arrived),
        })
        .await
        .unwrap();
    assert_eq!(tuesday_arrived.len(), 1);
    assert_eq!(tuesday_arrived[0].id, tuesday);

    // Mismatched combination matches nothing
    let monday_arrived = repo
        .list(&AppointmentFilter {
            date: Some("2024-05-06".to_string()),
            status: StatusFilter::Only(AppointmentStatus::Arrived),
        })
        .await
        .unwrap();
    assert!(monday_arrived.is_empty());
}

#[tokio::test]
async fn test_listing_stays_chronological_across_changes() {
    let store = store();
    let repo = AppointmentRepository::new(&store);

    for (date, time, name) in [
        ("2024-05-07", "09:00", "Late"),
        ("2024-05-06", "16:00", "Mid"),
        ("2024-05-06", "08:00", "Early"),
    ] {
        repo.create(&NewAppointment::new(date, time, name, "9990001111").unwrap())
            .await
            .unwrap();
    }

    let names = |list: Vec<classic_cuts_core::Appointment>| -> Vec<String> {
        list.into_iter().map(|a| a.name).collect()
    };

    let listed = repo.list(&AppointmentFilter::all()).await.unwrap();
    assert_eq!(names(listed), vec!["Early", "Mid", "Late"]);

    // Status changes do not reorder the queue.
    let all = repo.list(&AppointmentFilter::all()).await.unwrap();
    repo.set_status(&all[0].id, AppointmentStatus::Arrived)
        .await
        .unwrap();
    let listed = repo.list(&AppointmentFilter::all()).await.unwrap();
    assert_eq!(names(listed), vec!["Early", "Mid", "Late"]);
}
