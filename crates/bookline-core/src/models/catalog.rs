//! Catalog entities: services and providers.
//!
//! Catalog records are immutable at runtime and owned by the seeded catalog
//! tables. Reservations reference them by id and snapshot their display
//! fields at creation time, so later catalog edits never rewrite history.

use serde::{Deserialize, Serialize};

/// A bookable service offered by the business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Unique identifier for the service
    pub id: u64,

    /// Display name of the service
    pub name: String,

    /// Longer marketing description
    pub description: Option<String>,

    /// Duration in minutes (always positive)
    pub duration: i64,

    /// Price in the business currency (never negative)
    pub price: f64,
}

/// A provider clients can book appointments with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// Unique identifier for the provider
    pub id: u64,

    /// Display name of the provider
    pub name: String,

    /// Short biography
    pub bio: Option<String>,

    /// Specialty labels, e.g. service names the provider is trained in
    #[serde(default)]
    pub specialties: Vec<String>,
}
