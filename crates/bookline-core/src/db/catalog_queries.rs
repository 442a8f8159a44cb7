//! Read-only catalog lookups for services and providers.
//!
//! The connection-level functions exist so reservation transactions can
//! resolve catalog references atomically with the write they guard.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::{
    error::{Result, SchedulerError},
    models::{Provider, Service},
};

const SELECT_SERVICE_SQL: &str =
    "SELECT id, name, description, duration, price FROM services WHERE id = ?1";
const LIST_SERVICES_SQL: &str =
    "SELECT id, name, description, duration, price FROM services ORDER BY id";
const SELECT_PROVIDER_SQL: &str = "SELECT id, name, bio, specialties FROM providers WHERE id = ?1";
const LIST_PROVIDERS_SQL: &str = "SELECT id, name, bio, specialties FROM providers ORDER BY id";

fn service_from_row(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        duration: row.get(3)?,
        price: row.get(4)?,
    })
}

fn provider_from_row(row: &Row<'_>) -> rusqlite::Result<Provider> {
    let specialties: String = row.get(3)?;
    Ok(Provider {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        bio: row.get(2)?,
        specialties: specialties
            .split(',')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}

/// Looks up a service on an open connection or transaction.
pub(crate) fn lookup_service(conn: &Connection, id: u64) -> Result<Option<Service>> {
    conn.query_row(SELECT_SERVICE_SQL, params![id as i64], service_from_row)
        .optional()
        .map_err(|e| SchedulerError::database_error("Failed to query service", e))
}

/// Looks up a provider on an open connection or transaction.
pub(crate) fn lookup_provider(conn: &Connection, id: u64) -> Result<Option<Provider>> {
    conn.query_row(SELECT_PROVIDER_SQL, params![id as i64], provider_from_row)
        .optional()
        .map_err(|e| SchedulerError::database_error("Failed to query provider", e))
}

impl super::Database {
    /// Looks up a service by id.
    pub fn get_service(&self, id: u64) -> Result<Option<Service>> {
        lookup_service(&self.connection, id)
    }

    /// Lists all services in the catalog.
    pub fn list_services(&self) -> Result<Vec<Service>> {
        let mut stmt = self
            .connection
            .prepare(LIST_SERVICES_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let services = stmt
            .query_map([], service_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query services", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch services", e))?;

        Ok(services)
    }

    /// Looks up a provider by id.
    pub fn get_provider(&self, id: u64) -> Result<Option<Provider>> {
        lookup_provider(&self.connection, id)
    }

    /// Lists all providers in the catalog.
    pub fn list_providers(&self) -> Result<Vec<Provider>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PROVIDERS_SQL)
            .map_err(|e| SchedulerError::database_error("Failed to prepare query", e))?;

        let providers = stmt
            .query_map([], provider_from_row)
            .map_err(|e| SchedulerError::database_error("Failed to query providers", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| SchedulerError::database_error("Failed to fetch providers", e))?;

        Ok(providers)
    }
}
