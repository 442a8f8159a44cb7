//! High-level scheduling API.
//!
//! This module provides the main [`Scheduler`] interface for the appointment
//! system. The scheduler composes the catalog, the slot generator, and the
//! reservation store, and implements the business rules: validation, catalog
//! resolution, conflict checking, and the reservation lifecycle.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │    Scheduler     │    │    Database     │
//! │   (CLI, MCP)    │───▶│ (catalog_ops,    │───▶│    (via db/)    │
//! │                 │    │  slot_ops,       │    │                 │
//! │                 │    │  reservation_ops)│    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances
//! - [`catalog_ops`]: Read-only service and provider lookups
//! - [`slot_ops`]: Available-slot listings for a calendar day
//! - [`reservation_ops`]: Reservation create/read/update/status/delete
//!
//! All operations are async; blocking SQLite work runs on the tokio blocking
//! pool. Mutations are serialized by SQLite's single-writer locking, so the
//! conflict check and the write it guards are atomic (see
//! [`crate::db::reservation_queries`]).
//!
//! # Usage
//!
//! ```rust
//! use bookline_core::{SchedulerBuilder, params::CreateReservation};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("bookings.db"))
//!     .build()
//!     .await?;
//!
//! let reservation = scheduler
//!     .create_reservation(&CreateReservation {
//!         start_time: "2024-01-10T10:00:00Z".to_string(),
//!         service_id: 1,
//!         provider_id: 1,
//!         client_name: "John Doe".to_string(),
//!         client_email: "john@example.com".to_string(),
//!         client_phone: None,
//!     })
//!     .await?;
//! println!("Booked reservation {}", reservation.id);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::slots::BusinessHours;

pub mod builder;
pub mod catalog_ops;
pub mod reservation_ops;
pub mod slot_ops;


// Re-export the main types
pub use builder::SchedulerBuilder;

/// Main scheduling interface composing catalog, slots, and reservations.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) business_hours: BusinessHours,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path and hours.
    pub(crate) fn new(db_path: PathBuf, business_hours: BusinessHours) -> Self {
        Self {
            db_path,
            business_hours,
        }
    }

    /// The business-hours configuration this scheduler generates slots for.
    pub fn business_hours(&self) -> BusinessHours {
        self.business_hours
    }
}
