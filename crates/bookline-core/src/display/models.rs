//! Display implementations for domain models.
//!
//! Markdown-formatted output for services, providers, and reservations,
//! separated from the model definitions to keep data and presentation apart.

use std::fmt;

use super::datetime::SlotTime;
use crate::models::{Provider, Reservation, ReservationStatus, Service};

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) — {} min, ${:.2}",
            self.name, self.id, self.duration, self.price
        )?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;

        if !self.specialties.is_empty() {
            writeln!(f, "- Specialties: {}", self.specialties.join(", "))?;
        }

        if let Some(bio) = &self.bio {
            writeln!(f)?;
            writeln!(f, "{bio}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Reservation {} ({})",
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- When: {}", SlotTime(&self.start_time))?;
        writeln!(
            f,
            "- Service: {} ({} min, ${:.2})",
            self.service_name, self.service_duration, self.service_price
        )?;
        writeln!(f, "- Provider: {}", self.provider_name)?;
        writeln!(f, "- Client: {} <{}>", self.client_name, self.client_email)?;
        if let Some(phone) = &self.client_phone {
            writeln!(f, "- Phone: {phone}")?;
        }
        writeln!(f, "- Created: {}", SlotTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", SlotTime(&self.updated_at))?;

        Ok(())
    }
}
