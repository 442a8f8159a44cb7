//! Available-slot operations for the Scheduler.

use jiff::Timestamp;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    display::SlotListing,
    error::{Result, SchedulerError},
    params::AvailableSlots,
    slots::{day_bounds, generate_slots},
};

impl Scheduler {
    /// Lists the open slots for a calendar day.
    ///
    /// Generates every candidate slot for the configured business hours,
    /// then removes those held by a confirmed reservation. With a provider
    /// id only that provider's calendar is consulted; without one, any
    /// provider's confirmed booking blocks its slot. The result preserves the
    /// generator's ascending order and is stable across calls when no
    /// mutation happens in between.
    pub async fn available_slots(&self, params: &AvailableSlots) -> Result<Vec<Timestamp>> {
        let date = params.validate()?;
        let provider_id = params.provider_id;
        let hours = self.business_hours;
        let db_path = self.db_path.clone();

        let candidates = generate_slots(date, &hours);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let (day_start, day_end) = day_bounds(date)?;
        let booked = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.confirmed_times_between(&day_start, &day_end, provider_id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(candidates
            .into_iter()
            .filter(|slot| !booked.contains(slot))
            .collect())
    }

    /// Lists open slots wrapped for display, echoing the queried date and
    /// provider alongside the slots.
    pub async fn available_slots_listing(&self, params: &AvailableSlots) -> Result<SlotListing> {
        let slots = self.available_slots(params).await?;
        Ok(SlotListing {
            date: params.date.clone(),
            provider_id: params.provider_id,
            slots,
        })
    }
}
