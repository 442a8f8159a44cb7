//! Reservation operations for the Scheduler.

use jiff::Timestamp;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{NewReservation, Reservation, ReservationFilter, UpdateReservationRequest},
    params::{ChangeStatus, CreateReservation, Id, ListReservations, UpdateReservation},
};

impl Scheduler {
    /// Rejects a start time outside the configured business hours.
    ///
    /// Lives in the scheduler because the store has no notion of hours; only
    /// slot-claiming paths (creation, rescheduling) call it.
    fn check_business_hours(&self, start_time: &Timestamp) -> Result<()> {
        if !self.business_hours.admits(start_time) {
            return Err(SchedulerError::invalid_input("start_time").with_reason(format!(
                "{start_time} is outside business hours ({:02}:00-{:02}:00)",
                self.business_hours.open_hour, self.business_hours.close_hour
            )));
        }
        Ok(())
    }

    /// Creates a new confirmed reservation.
    ///
    /// Runs the full sequence: validate required fields and the business-hours
    /// window, resolve the service and provider through the catalog, check the
    /// slot, snapshot the catalog display fields, insert. Resolution, check,
    /// and insert are one transaction in the store.
    pub async fn create_reservation(&self, params: &CreateReservation) -> Result<Reservation> {
        let request = NewReservation::try_from(params.clone())?;
        self.check_business_hours(&request.start_time)?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_reservation(&request)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a reservation by its ID.
    pub async fn get_reservation(&self, params: &Id) -> Result<Option<Reservation>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_reservation(id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists reservations, optionally filtered by status and provider, in
    /// insertion order.
    pub async fn list_reservations(&self, params: &ListReservations) -> Result<Vec<Reservation>> {
        let db_path = self.db_path.clone();
        let filter = ReservationFilter::from(params);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_reservations(Some(&filter))
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to a reservation.
    ///
    /// Slot-affecting changes (start time, provider) are conflict-checked
    /// against all other confirmed reservations before anything is written;
    /// a new start time must also fall within business hours. A rejected
    /// update leaves the store untouched.
    pub async fn update_reservation(&self, params: &UpdateReservation) -> Result<Reservation> {
        let id = params.id;
        let request = UpdateReservationRequest::try_from(params.clone())?;
        if let Some(ref start_time) = request.start_time {
            self.check_business_hours(start_time)?;
        }
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_reservation(id, &request)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Changes a reservation's lifecycle status without a conflict check.
    pub async fn change_status(&self, params: &ChangeStatus) -> Result<Reservation> {
        let status = params.validate()?;
        let id = params.id;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_reservation_status(id, status)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a reservation. This operation cannot be undone;
    /// prefer cancelling, which keeps the record.
    pub async fn delete_reservation(&self, params: &Id) -> Result<Reservation> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_reservation(id)
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
