//! Status enumeration for reservations.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of reservation statuses.
///
/// Only `Confirmed` reservations occupy a slot. `Cancelled` and `Completed`
/// reservations keep their record but release the slot, and are never
/// re-activated to `Confirmed` by the scheduling core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Reservation is active and blocks its (start time, provider) slot
    #[default]
    Confirmed,

    /// Reservation was cancelled; the record is retained, the slot is free
    Cancelled,

    /// Appointment took place; the slot is free
    Completed,
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            "completed" => Ok(ReservationStatus::Completed),
            _ => Err(format!("Invalid reservation status: {s}")),
        }
    }
}

impl ReservationStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }

    /// Whether a reservation in this status occupies its slot.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed)
    }

    /// Whether changing from this status to `next` is allowed.
    ///
    /// Transitions are monotone: once a reservation leaves `Confirmed` it can
    /// never return to it. Staff wanting the slot back create a new
    /// reservation instead.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        match self {
            ReservationStatus::Confirmed => true,
            ReservationStatus::Cancelled | ReservationStatus::Completed => {
                next != ReservationStatus::Confirmed
            }
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bookline_core::models::ReservationStatus;
    ///
    /// assert_eq!(ReservationStatus::Confirmed.with_icon(), "➤ Confirmed");
    /// assert_eq!(ReservationStatus::Cancelled.with_icon(), "✗ Cancelled");
    /// assert_eq!(ReservationStatus::Completed.with_icon(), "✓ Completed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "➤ Confirmed",
            ReservationStatus::Cancelled => "✗ Cancelled",
            ReservationStatus::Completed => "✓ Completed",
        }
    }
}
