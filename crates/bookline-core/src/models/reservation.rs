//! Reservation model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ReservationStatus;

/// A booked appointment slot.
///
/// The service and provider display fields are denormalized snapshots taken
/// when the reservation was created (or when the reservation was reassigned),
/// so catalog edits never retroactively alter existing reservations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Unique identifier, assigned on insert and immutable afterwards
    pub id: u64,

    /// Absolute start time of the appointment (UTC)
    pub start_time: Timestamp,

    /// Catalog id of the booked service
    pub service_id: u64,

    /// Catalog id of the booked provider
    pub provider_id: u64,

    /// Lifecycle status; only `Confirmed` blocks the slot
    #[serde(default)]
    pub status: ReservationStatus,

    /// Name of the client who booked
    pub client_name: String,

    /// Contact email of the client
    pub client_email: String,

    /// Optional contact phone number
    pub client_phone: Option<String>,

    /// Snapshot of the service name at booking time
    pub service_name: String,

    /// Snapshot of the service duration in minutes at booking time
    pub service_duration: i64,

    /// Snapshot of the service price at booking time
    pub service_price: f64,

    /// Snapshot of the provider name at booking time
    pub provider_name: String,

    /// Timestamp when the reservation was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the reservation was last modified (UTC)
    pub updated_at: Timestamp,
}
