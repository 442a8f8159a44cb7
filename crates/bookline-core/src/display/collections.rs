//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with consistent
//! structure and graceful empty-collection handling.

use std::fmt;

use jiff::Timestamp;

use super::datetime::SlotTime;
use crate::models::{Provider, Reservation, Service};

/// Newtype wrapper for displaying the service catalog.
pub struct Services(pub Vec<Service>);

impl fmt::Display for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No services found.");
        }
        for service in &self.0 {
            writeln!(f, "{service}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the provider roster.
pub struct Providers(pub Vec<Provider>);

impl fmt::Display for Providers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No providers found.");
        }
        for provider in &self.0 {
            writeln!(f, "{provider}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying reservation lists.
///
/// Uses a compact one-line-per-reservation format; the full record display
/// belongs to show/create/update output.
pub struct Reservations(pub Vec<Reservation>);

impl Reservations {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of reservations in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the reservations.
    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.0.iter()
    }
}

impl fmt::Display for Reservations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No reservations found.");
        }
        for r in &self.0 {
            writeln!(
                f,
                "- **{}** {} — {} with {} for {} ({})",
                r.id,
                SlotTime(&r.start_time),
                r.service_name,
                r.provider_name,
                r.client_name,
                r.status.as_str()
            )?;
        }
        Ok(())
    }
}

/// Available slots for one day, echoing the queried date and provider.
pub struct SlotListing {
    /// Calendar date the listing covers, as supplied by the caller
    pub date: String,
    /// Provider whose calendar was consulted, if any
    pub provider_id: Option<u64>,
    /// Open slot start times, ascending
    pub slots: Vec<Timestamp>,
}

impl fmt::Display for SlotListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.provider_id {
            Some(id) => writeln!(f, "# Available slots on {} (provider {})", self.date, id)?,
            None => writeln!(f, "# Available slots on {} (any provider)", self.date)?,
        }
        writeln!(f)?;

        if self.slots.is_empty() {
            writeln!(f, "No slots available.")?;
        } else {
            for slot in &self.slots {
                writeln!(f, "- {}", SlotTime(slot))?;
            }
        }

        Ok(())
    }
}
