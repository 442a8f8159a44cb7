//! Tests for the domain models.

use super::*;
use crate::params::{CreateReservation, ListReservations, UpdateReservation};

#[test]
fn test_status_parsing() {
    assert_eq!(
        "confirmed".parse::<ReservationStatus>(),
        Ok(ReservationStatus::Confirmed)
    );
    assert_eq!(
        "CANCELLED".parse::<ReservationStatus>(),
        Ok(ReservationStatus::Cancelled)
    );
    // US spelling accepted as well
    assert_eq!(
        "canceled".parse::<ReservationStatus>(),
        Ok(ReservationStatus::Cancelled)
    );
    assert_eq!(
        "completed".parse::<ReservationStatus>(),
        Ok(ReservationStatus::Completed)
    );
    assert!("pending".parse::<ReservationStatus>().is_err());
}

#[test]
fn test_status_round_trip() {
    for status in [
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
        ReservationStatus::Completed,
    ] {
        assert_eq!(status.as_str().parse::<ReservationStatus>(), Ok(status));
    }
}

#[test]
fn test_only_confirmed_blocks_slot() {
    assert!(ReservationStatus::Confirmed.blocks_slot());
    assert!(!ReservationStatus::Cancelled.blocks_slot());
    assert!(!ReservationStatus::Completed.blocks_slot());
}

#[test]
fn test_status_transitions_are_monotone() {
    let confirmed = ReservationStatus::Confirmed;
    let cancelled = ReservationStatus::Cancelled;
    let completed = ReservationStatus::Completed;

    assert!(confirmed.can_transition_to(cancelled));
    assert!(confirmed.can_transition_to(completed));
    assert!(confirmed.can_transition_to(confirmed));

    assert!(!cancelled.can_transition_to(confirmed));
    assert!(!completed.can_transition_to(confirmed));
    assert!(cancelled.can_transition_to(completed));
    assert!(completed.can_transition_to(cancelled));
}

#[test]
fn test_new_reservation_requires_client_fields() {
    let base = CreateReservation {
        start_time: "2024-01-10T10:00:00Z".to_string(),
        service_id: 1,
        provider_id: 1,
        client_name: "John Doe".to_string(),
        client_email: "john@example.com".to_string(),
        client_phone: None,
    };

    assert!(NewReservation::try_from(base.clone()).is_ok());

    let missing_name = CreateReservation {
        client_name: "  ".to_string(),
        ..base.clone()
    };
    assert!(NewReservation::try_from(missing_name).is_err());

    let missing_email = CreateReservation {
        client_email: String::new(),
        ..base.clone()
    };
    assert!(NewReservation::try_from(missing_email).is_err());

    let bad_email = CreateReservation {
        client_email: "not-an-email".to_string(),
        ..base.clone()
    };
    assert!(NewReservation::try_from(bad_email).is_err());

    let bad_time = CreateReservation {
        start_time: "sometime tomorrow".to_string(),
        ..base
    };
    assert!(NewReservation::try_from(bad_time).is_err());
}

#[test]
fn test_update_request_parses_typed_fields() {
    let params = UpdateReservation {
        id: 7,
        start_time: Some("2024-01-10T11:00:00Z".to_string()),
        status: Some("cancelled".to_string()),
        client_phone: Some("555-0100".to_string()),
        ..Default::default()
    };

    let request = UpdateReservationRequest::try_from(params).expect("valid update");
    assert_eq!(
        request.start_time.map(|t| t.to_string()),
        Some("2024-01-10T11:00:00Z".to_string())
    );
    assert_eq!(request.status, Some(ReservationStatus::Cancelled));
    assert_eq!(request.client_phone, Some("555-0100".to_string()));
    assert!(request.affects_slot());
}

#[test]
fn test_update_request_rejects_bad_status() {
    let params = UpdateReservation {
        id: 7,
        status: Some("on-hold".to_string()),
        ..Default::default()
    };
    assert!(UpdateReservationRequest::try_from(params).is_err());
}

#[test]
fn test_phone_only_update_does_not_affect_slot() {
    let params = UpdateReservation {
        id: 7,
        client_phone: Some("555-0100".to_string()),
        ..Default::default()
    };
    let request = UpdateReservationRequest::try_from(params).expect("valid update");
    assert!(!request.affects_slot());
    assert!(!request.is_empty());
}

#[test]
fn test_empty_update_request() {
    let params = UpdateReservation {
        id: 7,
        ..Default::default()
    };
    let request = UpdateReservationRequest::try_from(params).expect("valid update");
    assert!(request.is_empty());
}

#[test]
fn test_filter_from_list_params() {
    let params = ListReservations {
        status: Some(ReservationStatus::Confirmed),
        provider_id: Some(2),
    };
    let filter = ReservationFilter::from(&params);
    assert_eq!(filter.status, Some(ReservationStatus::Confirmed));
    assert_eq!(filter.provider_id, Some(2));
    assert!(filter.starts_on_or_after.is_none());
    assert!(filter.starts_before.is_none());
}
