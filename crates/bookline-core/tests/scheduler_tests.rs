mod common;

use bookline_core::{
    params::{AvailableSlots, ChangeStatus, CreateReservation, Id, ListReservations,
        UpdateReservation},
    ReservationStatus, SchedulerError,
};
use common::create_test_scheduler;

fn booking(start: &str, provider_id: u64) -> CreateReservation {
    CreateReservation {
        start_time: start.to_string(),
        service_id: 1,
        provider_id,
        client_name: "John Doe".to_string(),
        client_email: "john@example.com".to_string(),
        client_phone: None,
    }
}

fn slots_query(date: &str, provider_id: Option<u64>) -> AvailableSlots {
    AvailableSlots {
        date: date.to_string(),
        provider_id,
        service_id: None,
    }
}

#[tokio::test]
async fn test_complete_booking_workflow() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    // The catalog is seeded on first open.
    let services = scheduler.list_services().await.expect("list services");
    assert_eq!(services.len(), 4);
    let providers = scheduler.list_providers().await.expect("list providers");
    assert_eq!(providers.len(), 3);

    // A fresh day offers the full business-hours range.
    let open = scheduler
        .available_slots(&slots_query("2024-01-10", Some(1)))
        .await
        .expect("available slots");
    assert_eq!(open.len(), 8);
    assert_eq!(open[0].to_string(), "2024-01-10T09:00:00Z");

    // Book the 10:00 slot with provider 1.
    let reservation = scheduler
        .create_reservation(&booking("2024-01-10T10:00:00Z", 1))
        .await
        .expect("create reservation");
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(reservation.service_name, "Swedish Massage");
    assert_eq!(reservation.provider_name, "Jane Smith");

    // The booked slot disappears from the open list.
    let open = scheduler
        .available_slots(&slots_query("2024-01-10", Some(1)))
        .await
        .expect("available slots");
    assert_eq!(open.len(), 7);
    assert!(!open
        .iter()
        .any(|t| t.to_string() == "2024-01-10T10:00:00Z"));

    // Reschedule to 14:00 via a partial update.
    let moved = scheduler
        .update_reservation(&UpdateReservation {
            id: reservation.id,
            start_time: Some("2024-01-10T14:00:00Z".to_string()),
            ..Default::default()
        })
        .await
        .expect("update reservation");
    assert_eq!(moved.start_time.to_string(), "2024-01-10T14:00:00Z");

    // Completing the visit releases the slot.
    let completed = scheduler
        .change_status(&ChangeStatus {
            id: reservation.id,
            status: "completed".to_string(),
        })
        .await
        .expect("change status");
    assert_eq!(completed.status, ReservationStatus::Completed);

    let open = scheduler
        .available_slots(&slots_query("2024-01-10", Some(1)))
        .await
        .expect("available slots");
    assert_eq!(open.len(), 8);

    // The record survives as history.
    let listed = scheduler
        .list_reservations(&ListReservations {
            status: Some(ReservationStatus::Completed),
            provider_id: None,
        })
        .await
        .expect("list reservations");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, reservation.id);
}

#[tokio::test]
async fn test_double_booking_is_rejected() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    scheduler
        .create_reservation(&booking("2024-01-10T10:00:00Z", 1))
        .await
        .expect("first booking");

    let second = scheduler
        .create_reservation(&booking("2024-01-10T10:00:00Z", 1))
        .await;
    assert!(matches!(second, Err(SchedulerError::SlotConflict { .. })));

    // The same hour with another provider is fine.
    scheduler
        .create_reservation(&booking("2024-01-10T10:00:00Z", 2))
        .await
        .expect("other provider");
}

#[tokio::test]
async fn test_availability_without_provider_consults_all_calendars() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    scheduler
        .create_reservation(&booking("2024-01-10T09:00:00Z", 1))
        .await
        .expect("booking");
    scheduler
        .create_reservation(&booking("2024-01-10T12:00:00Z", 3))
        .await
        .expect("booking");

    let open = scheduler
        .available_slots(&slots_query("2024-01-10", None))
        .await
        .expect("available slots");
    assert_eq!(open.len(), 6);
    assert!(!open.iter().any(|t| t.to_string() == "2024-01-10T09:00:00Z"));
    assert!(!open.iter().any(|t| t.to_string() == "2024-01-10T12:00:00Z"));
}

#[tokio::test]
async fn test_invalid_inputs_are_rejected_before_the_store() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let bad_date = scheduler
        .available_slots(&slots_query("January 10th", Some(1)))
        .await;
    assert!(matches!(bad_date, Err(SchedulerError::InvalidInput { .. })));

    let bad_email = scheduler
        .create_reservation(&CreateReservation {
            client_email: "nope".to_string(),
            ..booking("2024-01-10T10:00:00Z", 1)
        })
        .await;
    assert!(matches!(bad_email, Err(SchedulerError::InvalidInput { .. })));

    let unknown_service = scheduler
        .create_reservation(&CreateReservation {
            service_id: 99,
            ..booking("2024-01-10T10:00:00Z", 1)
        })
        .await;
    assert!(matches!(
        unknown_service,
        Err(SchedulerError::ServiceNotFound { id: 99 })
    ));

    // None of the rejected requests left a record behind.
    let all = scheduler
        .list_reservations(&ListReservations::default())
        .await
        .expect("list reservations");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_get_and_delete() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let reservation = scheduler
        .create_reservation(&booking("2024-01-10T10:00:00Z", 1))
        .await
        .expect("create reservation");

    let fetched = scheduler
        .get_reservation(&Id { id: reservation.id })
        .await
        .expect("get reservation");
    assert_eq!(fetched, Some(reservation.clone()));

    let deleted = scheduler
        .delete_reservation(&Id { id: reservation.id })
        .await
        .expect("delete reservation");
    assert_eq!(deleted.id, reservation.id);

    let gone = scheduler
        .get_reservation(&Id { id: reservation.id })
        .await
        .expect("get reservation");
    assert!(gone.is_none());
}
