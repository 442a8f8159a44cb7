//! Data models for the scheduling domain.
//!
//! This module contains the core domain models: catalog entities
//! ([`Service`], [`Provider`]), the [`Reservation`] record and its
//! [`ReservationStatus`] lifecycle, plus query filters and partial-update
//! requests. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation.

pub mod catalog;
pub mod filters;
pub mod requests;
pub mod reservation;
pub mod status;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use catalog::{Provider, Service};
pub use filters::ReservationFilter;
pub use requests::{NewReservation, UpdateReservationRequest};
pub use reservation::Reservation;
pub use status::ReservationStatus;
