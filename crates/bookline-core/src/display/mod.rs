//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! this module layers newtype wrappers on top for context-specific formatting:
//! collections of catalog entries and reservations, slot listings, and
//! create/update/delete operation results. All formatters produce markdown so
//! the CLI can render them richly and the MCP server can return them as text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Services, Providers,
//!   Reservations, SlotListing)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Providers, Reservations, Services, SlotListing};
pub use datetime::SlotTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
