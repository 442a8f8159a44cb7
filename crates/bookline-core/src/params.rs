//! Parameter structures for Bookline operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! beyond serde. Interface layers wrap these with their own derives (clap
//! `Args`, schemars `JsonSchema`) and convert via `From`/`TryFrom`, keeping
//! the core free of presentation concerns.
//!
//! Raw string fields (timestamps, dates, statuses) are validated here and
//! turned into typed values; malformed input surfaces as
//! [`SchedulerError::InvalidInput`] before any storage work happens.

use jiff::{civil::Date, Timestamp};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SchedulerError},
    models::ReservationStatus,
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show, change-status target lookup, and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the reservation to operate on
    pub id: u64,
}

/// Parameters for creating a reservation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateReservation {
    /// Appointment start time as an RFC 3339 timestamp,
    /// e.g. `2024-01-10T10:00:00Z`
    pub start_time: String,
    /// Catalog id of the service to book
    pub service_id: u64,
    /// Catalog id of the provider to book with
    pub provider_id: u64,
    /// Name of the client (required)
    pub client_name: String,
    /// Contact email of the client (required)
    pub client_email: String,
    /// Optional contact phone number
    pub client_phone: Option<String>,
}

impl CreateReservation {
    /// Validates required fields and parses the start time.
    pub fn validate(&self) -> Result<Timestamp> {
        if self.client_name.trim().is_empty() {
            return Err(SchedulerError::invalid_input("client_name")
                .with_reason("client name is required"));
        }
        if self.client_email.trim().is_empty() {
            return Err(SchedulerError::invalid_input("client_email")
                .with_reason("client email is required"));
        }
        if !self.client_email.contains('@') {
            return Err(SchedulerError::invalid_input("client_email")
                .with_reason("client email must contain '@'"));
        }
        parse_start_time(&self.start_time)
    }
}

/// Parameters for partially updating a reservation.
///
/// Fields left as `None` are not changed. Changing the start time or provider
/// triggers a conflict re-check against all other confirmed reservations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateReservation {
    /// The ID of the reservation to update
    pub id: u64,
    /// New start time as an RFC 3339 timestamp
    pub start_time: Option<String>,
    /// Reassign to a different service (re-captures the service snapshot)
    pub service_id: Option<u64>,
    /// Reassign to a different provider (re-captures the provider snapshot)
    pub provider_id: Option<u64>,
    /// New status ('confirmed', 'cancelled', or 'completed'); a cancelled or
    /// completed reservation cannot return to 'confirmed'
    pub status: Option<String>,
    /// New client name
    pub client_name: Option<String>,
    /// New client email
    pub client_email: Option<String>,
    /// New client phone number
    pub client_phone: Option<String>,
}

impl UpdateReservation {
    /// Parses and validates the optional start time and status strings.
    pub fn validate(&self) -> Result<(Option<Timestamp>, Option<ReservationStatus>)> {
        let start_time = self
            .start_time
            .as_deref()
            .map(parse_start_time)
            .transpose()?;

        let status = self
            .status
            .as_deref()
            .map(parse_status)
            .transpose()?;

        if let Some(ref email) = self.client_email {
            if !email.contains('@') {
                return Err(SchedulerError::invalid_input("client_email")
                    .with_reason("client email must contain '@'"));
            }
        }

        Ok((start_time, status))
    }
}

/// Parameters for changing only a reservation's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ChangeStatus {
    /// The ID of the reservation
    pub id: u64,
    /// Target status ('confirmed', 'cancelled', or 'completed')
    pub status: String,
}

impl ChangeStatus {
    /// Parses the target status string.
    pub fn validate(&self) -> Result<ReservationStatus> {
        parse_status(&self.status)
    }
}

/// Parameters for listing reservations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListReservations {
    /// Only show reservations with this status
    pub status: Option<ReservationStatus>,
    /// Only show reservations booked with this provider
    pub provider_id: Option<u64>,
}

/// Parameters for listing available slots on a calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AvailableSlots {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Provider whose calendar to check. Each provider has an independent
    /// calendar; without this, any provider's confirmed booking blocks its
    /// slot, so real callers should always supply one.
    pub provider_id: Option<u64>,
    /// Accepted for forward compatibility; slot generation currently ignores
    /// the service
    pub service_id: Option<u64>,
}

impl AvailableSlots {
    /// Parses the calendar date.
    pub fn validate(&self) -> Result<Date> {
        if self.date.trim().is_empty() {
            return Err(SchedulerError::invalid_input("date").with_reason("date is required"));
        }
        self.date.parse::<Date>().map_err(|e| {
            SchedulerError::invalid_input("date")
                .with_reason(format!("expected YYYY-MM-DD: {e}"))
        })
    }
}

fn parse_start_time(raw: &str) -> Result<Timestamp> {
    if raw.trim().is_empty() {
        return Err(
            SchedulerError::invalid_input("start_time").with_reason("start time is required")
        );
    }
    raw.parse::<Timestamp>().map_err(|e| {
        SchedulerError::invalid_input("start_time")
            .with_reason(format!("expected an RFC 3339 timestamp: {e}"))
    })
}

fn parse_status(raw: &str) -> Result<ReservationStatus> {
    raw.parse::<ReservationStatus>()
        .map_err(|reason| SchedulerError::invalid_input("status").with_reason(reason))
}
