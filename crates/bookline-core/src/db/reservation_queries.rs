//! Reservation CRUD operations and the slot-conflict check.
//!
//! Every mutating operation runs inside a single SQLite transaction, so the
//! check-then-act sequences (conflict check followed by insert or update) are
//! atomic with respect to concurrent writers. A rejected operation commits
//! nothing and leaves the store exactly as it was.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    db::catalog_queries::{lookup_provider, lookup_service},
    error::{DatabaseResultExt, Result, SchedulerError},
    models::{
        NewReservation, Reservation, ReservationFilter, ReservationStatus,
        UpdateReservationRequest,
    },
};

const RESERVATION_COLUMNS: &str = "id, start_time, service_id, provider_id, status, \
     client_name, client_email, client_phone, \
     service_name, service_duration, service_price, provider_name, \
     created_at, updated_at";

const INSERT_RESERVATION_SQL: &str = "INSERT INTO reservations \
     (start_time, service_id, provider_id, status, \
      client_name, client_email, client_phone, \
      service_name, service_duration, service_price, provider_name, \
      created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";

const UPDATE_RESERVATION_SQL: &str = "UPDATE reservations SET \
     start_time = ?1, service_id = ?2, provider_id = ?3, status = ?4, \
     client_name = ?5, client_email = ?6, client_phone = ?7, \
     service_name = ?8, service_duration = ?9, service_price = ?10, \
     provider_name = ?11, updated_at = ?12 \
     WHERE id = ?13";

const UPDATE_STATUS_SQL: &str =
    "UPDATE reservations SET status = ?1, updated_at = ?2 WHERE id = ?3";

const DELETE_RESERVATION_SQL: &str = "DELETE FROM reservations WHERE id = ?1";

// The slot check is exact-match on the canonical RFC 3339 start time: slots
// are fixed-duration and non-overlapping, so equality is the whole test.
const SLOT_TAKEN_SQL: &str = "SELECT EXISTS(\
     SELECT 1 FROM reservations \
     WHERE status = 'confirmed' AND provider_id = ?1 AND start_time = ?2 \
       AND (?3 IS NULL OR id <> ?3))";

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn reservation_from_row(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let status_str: String = row.get(4)?;
    let status = status_str.parse::<ReservationStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid reservation status: {status_str}"),
            )),
        )
    })?;

    Ok(Reservation {
        id: row.get::<_, i64>(0)? as u64,
        start_time: parse_timestamp(row, 1)?,
        service_id: row.get::<_, i64>(2)? as u64,
        provider_id: row.get::<_, i64>(3)? as u64,
        status,
        client_name: row.get(5)?,
        client_email: row.get(6)?,
        client_phone: row.get(7)?,
        service_name: row.get(8)?,
        service_duration: row.get(9)?,
        service_price: row.get(10)?,
        provider_name: row.get(11)?,
        created_at: parse_timestamp(row, 12)?,
        updated_at: parse_timestamp(row, 13)?,
    })
}

/// The unified conflict check, usable on a bare connection or inside a
/// transaction.
///
/// Returns true iff a confirmed reservation other than `exclude_id` holds the
/// exact (start time, provider) pair.
fn slot_taken_on(
    conn: &Connection,
    start_time: &Timestamp,
    provider_id: u64,
    exclude_id: Option<u64>,
) -> Result<bool> {
    conn.query_row(
        SLOT_TAKEN_SQL,
        params![
            provider_id as i64,
            start_time.to_string(),
            exclude_id.map(|id| id as i64)
        ],
        |row| row.get(0),
    )
    .map_err(|e| SchedulerError::database_error("Failed to check slot availability", e))
}

fn fetch_reservation(conn: &Connection, id: u64) -> Result<Option<Reservation>> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?1");
    conn.query_row(&sql, params![id as i64], reservation_from_row)
        .optional()
        .map_err(|e| SchedulerError::database_error("Failed to query reservation", e))
}

impl super::Database {
    /// Returns whether a confirmed reservation already occupies the given
    /// (start time, provider) slot, optionally excluding one reservation id.
    pub fn slot_taken(
        &self,
        start_time: &Timestamp,
        provider_id: u64,
        exclude_id: Option<u64>,
    ) -> Result<bool> {
        slot_taken_on(&self.connection, start_time, provider_id, exclude_id)
    }

    /// Creates a new confirmed reservation.
    ///
    /// Resolves the referenced service and provider, runs the conflict check,
    /// snapshots the catalog display fields, and inserts — all inside one
    /// transaction, so no other creation for the same slot can interleave
    /// between the check and the insert.
    pub fn create_reservation(&mut self, request: &NewReservation) -> Result<Reservation> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let service = lookup_service(&tx, request.service_id)?.ok_or(
            SchedulerError::ServiceNotFound {
                id: request.service_id,
            },
        )?;
        let provider = lookup_provider(&tx, request.provider_id)?.ok_or(
            SchedulerError::ProviderNotFound {
                id: request.provider_id,
            },
        )?;

        if slot_taken_on(&tx, &request.start_time, request.provider_id, None)? {
            return Err(SchedulerError::SlotConflict {
                start_time: request.start_time.to_string(),
                provider_id: request.provider_id,
            });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_RESERVATION_SQL,
            params![
                request.start_time.to_string(),
                request.service_id as i64,
                request.provider_id as i64,
                ReservationStatus::Confirmed.as_str(),
                request.client_name,
                request.client_email,
                request.client_phone,
                service.name,
                service.duration,
                service.price,
                provider.name,
                &now_str,
                &now_str,
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to insert reservation", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Reservation {
            id,
            start_time: request.start_time,
            service_id: request.service_id,
            provider_id: request.provider_id,
            status: ReservationStatus::Confirmed,
            client_name: request.client_name.clone(),
            client_email: request.client_email.clone(),
            client_phone: request.client_phone.clone(),
            service_name: service.name,
            service_duration: service.duration,
            service_price: service.price,
            provider_name: provider.name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a reservation by its ID.
    pub fn get_reservation(&self, id: u64) -> Result<Option<Reservation>> {
        fetch_reservation(&self.connection, id)
    }

    /// Lists reservations with optional filtering, in insertion order.
    pub fn list_reservations(
        &self,
        filter: Option<&ReservationFilter>,
    ) -> Result<Vec<Reservation>> {
        let mut query = format!("SELECT {RESERVATION_COLUMNS} FROM reservations");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }

            if let Some(provider_id) = f.provider_id {
                conditions.push("provider_id = ?");
                params_vec.push(Box::new(provider_id as i64));
            }

            if let Some(ref after) = f.starts_on_or_after {
                conditions.push("start_time >= ?");
                params_vec.push(Box::new(after.to_string()));
            }

            if let Some(ref before) = f.starts_before {
                conditions.push("start_time < ?");
                params_vec.push(Box::new(before.to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let reservations = stmt
            .query_map(&params_refs[..], reservation_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query reservations", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch reservations", e))?;

        Ok(reservations)
    }

    /// Applies a partial update to a reservation.
    ///
    /// Provided fields are merged onto the stored record. If the merged start
    /// time or provider differs from the stored slot, the conflict check runs
    /// against all other confirmed reservations before anything is written.
    /// Reassigning the service or provider re-captures the matching snapshot
    /// fields from the catalog.
    pub fn update_reservation(
        &mut self,
        id: u64,
        request: &UpdateReservationRequest,
    ) -> Result<Reservation> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current =
            fetch_reservation(&tx, id)?.ok_or(SchedulerError::ReservationNotFound { id })?;

        if request.is_empty() {
            return Ok(current);
        }

        if let Some(new_status) = request.status {
            if !current.status.can_transition_to(new_status) {
                return Err(SchedulerError::invalid_input("status").with_reason(format!(
                    "cannot re-activate a {} reservation to {}",
                    current.status.as_str(),
                    new_status.as_str()
                )));
            }
        }

        let mut updated = current.clone();
        updated.start_time = request.start_time.unwrap_or(current.start_time);
        updated.provider_id = request.provider_id.unwrap_or(current.provider_id);
        updated.service_id = request.service_id.unwrap_or(current.service_id);
        updated.status = request.status.unwrap_or(current.status);
        if let Some(ref name) = request.client_name {
            updated.client_name = name.clone();
        }
        if let Some(ref email) = request.client_email {
            updated.client_email = email.clone();
        }
        if let Some(ref phone) = request.client_phone {
            updated.client_phone = Some(phone.clone());
        }

        if request.affects_slot()
            && (updated.start_time != current.start_time
                || updated.provider_id != current.provider_id)
            && slot_taken_on(&tx, &updated.start_time, updated.provider_id, Some(id))?
        {
            return Err(SchedulerError::SlotConflict {
                start_time: updated.start_time.to_string(),
                provider_id: updated.provider_id,
            });
        }

        // Re-capture snapshots only when the reference itself was reassigned.
        if let Some(service_id) = request.service_id {
            let service = lookup_service(&tx, service_id)?
                .ok_or(SchedulerError::ServiceNotFound { id: service_id })?;
            updated.service_name = service.name;
            updated.service_duration = service.duration;
            updated.service_price = service.price;
        }
        if let Some(provider_id) = request.provider_id {
            let provider = lookup_provider(&tx, provider_id)?
                .ok_or(SchedulerError::ProviderNotFound { id: provider_id })?;
            updated.provider_name = provider.name;
        }

        updated.updated_at = Timestamp::now();

        tx.execute(
            UPDATE_RESERVATION_SQL,
            params![
                updated.start_time.to_string(),
                updated.service_id as i64,
                updated.provider_id as i64,
                updated.status.as_str(),
                updated.client_name,
                updated.client_email,
                updated.client_phone,
                updated.service_name,
                updated.service_duration,
                updated.service_price,
                updated.provider_name,
                updated.updated_at.to_string(),
                id as i64,
            ],
        )
        .map_err(|e| SchedulerError::database_error("Failed to update reservation", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Changes only the lifecycle status of a reservation.
    ///
    /// No conflict check is needed: a status change alone never claims a new
    /// slot. Re-activating a cancelled or completed reservation to confirmed
    /// is rejected.
    pub fn set_reservation_status(
        &mut self,
        id: u64,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut current =
            fetch_reservation(&tx, id)?.ok_or(SchedulerError::ReservationNotFound { id })?;

        if !current.status.can_transition_to(status) {
            return Err(SchedulerError::invalid_input("status").with_reason(format!(
                "cannot re-activate a {} reservation to {}",
                current.status.as_str(),
                status.as_str()
            )));
        }

        let now = Timestamp::now();
        tx.execute(
            UPDATE_STATUS_SQL,
            params![status.as_str(), now.to_string(), id as i64],
        )
        .map_err(|e| SchedulerError::database_error("Failed to update reservation status", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        current.status = status;
        current.updated_at = now;
        Ok(current)
    }

    /// Permanently deletes a reservation.
    ///
    /// This is the administrative remove-the-record operation, distinct from
    /// cancelling (which retains the record). It cannot be undone.
    pub fn delete_reservation(&mut self, id: u64) -> Result<Reservation> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current =
            fetch_reservation(&tx, id)?.ok_or(SchedulerError::ReservationNotFound { id })?;

        tx.execute(DELETE_RESERVATION_SQL, params![id as i64])
            .map_err(|e| SchedulerError::database_error("Failed to delete reservation", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(current)
    }

    /// Start times of confirmed reservations inside a half-open time window,
    /// optionally restricted to one provider.
    ///
    /// Used by availability listings: with no provider restriction, every
    /// confirmed reservation in the window blocks its time.
    pub fn confirmed_times_between(
        &self,
        day_start: &Timestamp,
        day_end: &Timestamp,
        provider_id: Option<u64>,
    ) -> Result<Vec<Timestamp>> {
        let filter =
            ReservationFilter::confirmed_between(*day_start, *day_end, provider_id);
        Ok(self
            .list_reservations(Some(&filter))?
            .into_iter()
            .map(|r| r.start_time)
            .collect())
    }
}
