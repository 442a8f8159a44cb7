//! Filter types for querying reservations.

use jiff::Timestamp;

use super::ReservationStatus;

/// Filter options for querying reservations.
///
/// All fields are conjunctive; `None` means "no constraint". Results are
/// always returned in insertion (id) order.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Filter by lifecycle status
    pub status: Option<ReservationStatus>,

    /// Filter by booked provider
    pub provider_id: Option<u64>,

    /// Filter by start time range (inclusive lower bound)
    pub starts_on_or_after: Option<Timestamp>,

    /// Filter by start time range (exclusive upper bound)
    pub starts_before: Option<Timestamp>,
}

impl ReservationFilter {
    /// Filter for the confirmed reservations of one calendar day, used when
    /// computing slot availability.
    ///
    /// With `provider_id` of `None` the filter matches every provider's
    /// confirmed reservations in the window, which makes every booked time
    /// unavailable regardless of provider. Callers computing a real calendar
    /// should always pass a provider.
    pub fn confirmed_between(
        day_start: Timestamp,
        day_end: Timestamp,
        provider_id: Option<u64>,
    ) -> Self {
        Self {
            status: Some(ReservationStatus::Confirmed),
            provider_id,
            starts_on_or_after: Some(day_start),
            starts_before: Some(day_end),
        }
    }
}

impl From<&crate::params::ListReservations> for ReservationFilter {
    fn from(params: &crate::params::ListReservations) -> Self {
        Self {
            status: params.status,
            provider_id: params.provider_id,
            ..Default::default()
        }
    }
}
