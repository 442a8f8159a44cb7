//! Core library for the Bookline appointment scheduling application.
//!
//! This crate provides the scheduling core: catalog lookups, slot generation,
//! the reservation store, conflict checking, and the reservation lifecycle,
//! along with error handling and display formatting.
//!
//! # Scheduling Model
//!
//! Appointments occupy fixed one-hour slots. For a given day the slot
//! generator produces every candidate start time inside the configured
//! business hours; a slot is available unless a **confirmed** reservation
//! already holds the same (start time, provider) pair. Cancelled and
//! completed reservations keep their record but release the slot, and are
//! never re-activated to confirmed.
//!
//! Each reservation carries a snapshot of the booked service's and provider's
//! display fields, captured at creation, so catalog edits never rewrite
//! history.
//!
//! # Quick Start
//!
//! ```rust
//! use bookline_core::{SchedulerBuilder, params::{AvailableSlots, CreateReservation}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a scheduler instance
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("bookings.db"))
//!     .build()
//!     .await?;
//!
//! // Book a slot
//! let reservation = scheduler
//!     .create_reservation(&CreateReservation {
//!         start_time: "2024-01-10T10:00:00Z".to_string(),
//!         service_id: 1,
//!         provider_id: 1,
//!         client_name: "John Doe".to_string(),
//!         client_email: "john@example.com".to_string(),
//!         client_phone: Some("123-456-7890".to_string()),
//!     })
//!     .await?;
//! println!("Booked: {}", reservation);
//!
//! // See what is still open that day
//! let open = scheduler
//!     .available_slots(&AvailableSlots {
//!         date: "2024-01-10".to_string(),
//!         provider_id: Some(1),
//!         service_id: None,
//!     })
//!     .await?;
//! assert!(!open.contains(&reservation.start_time));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod slots;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, OperationStatus, Providers, Reservations, Services, SlotListing,
    UpdateResult,
};
pub use error::{Result, SchedulerError};
pub use models::{
    NewReservation, Provider, Reservation, ReservationFilter, ReservationStatus, Service,
    UpdateReservationRequest,
};
pub use params::{
    AvailableSlots, ChangeStatus, CreateReservation, Id, ListReservations, UpdateReservation,
};
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use slots::{generate_slots, BusinessHours};
