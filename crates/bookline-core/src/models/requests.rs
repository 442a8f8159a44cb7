//! Request types for mutating reservations.

use jiff::Timestamp;

use super::ReservationStatus;

/// Validated request to create a reservation.
///
/// Produced from raw [`crate::params::CreateReservation`] parameters after
/// required-field and timestamp validation; catalog resolution and the
/// conflict check happen later, inside the insert transaction.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub start_time: Timestamp,
    pub service_id: u64,
    pub provider_id: u64,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
}

impl TryFrom<crate::params::CreateReservation> for NewReservation {
    type Error = crate::SchedulerError;

    fn try_from(params: crate::params::CreateReservation) -> Result<Self, Self::Error> {
        let start_time = params.validate()?;

        Ok(Self {
            start_time,
            service_id: params.service_id,
            provider_id: params.provider_id,
            client_name: params.client_name,
            client_email: params.client_email,
            client_phone: params.client_phone,
        })
    }
}

/// Validated partial-update request for a reservation.
///
/// Each `Some` field is merged onto the stored record; `None` fields are left
/// unchanged. Changing `start_time` or `provider_id` re-runs the conflict
/// check (excluding the reservation's own id) before the merge is applied.
/// Reassigning `service_id` or `provider_id` re-captures the corresponding
/// catalog snapshot fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationRequest {
    pub start_time: Option<Timestamp>,
    pub service_id: Option<u64>,
    pub provider_id: Option<u64>,
    pub status: Option<ReservationStatus>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
}

impl UpdateReservationRequest {
    /// Whether the request carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.service_id.is_none()
            && self.provider_id.is_none()
            && self.status.is_none()
            && self.client_name.is_none()
            && self.client_email.is_none()
            && self.client_phone.is_none()
    }

    /// Whether the request touches a slot-affecting field and therefore
    /// requires a conflict re-check.
    pub fn affects_slot(&self) -> bool {
        self.start_time.is_some() || self.provider_id.is_some()
    }
}

impl TryFrom<crate::params::UpdateReservation> for UpdateReservationRequest {
    type Error = crate::SchedulerError;

    /// Convert raw update parameters into a validated request.
    ///
    /// Parses the start time and status strings and rejects malformed values
    /// with `SchedulerError::InvalidInput`.
    fn try_from(params: crate::params::UpdateReservation) -> Result<Self, Self::Error> {
        let (start_time, status) = params.validate()?;

        Ok(Self {
            start_time,
            service_id: params.service_id,
            provider_id: params.provider_id,
            status,
            client_name: params.client_name,
            client_email: params.client_email,
            client_phone: params.client_phone,
        })
    }
}
