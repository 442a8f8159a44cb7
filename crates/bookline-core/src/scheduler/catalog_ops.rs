//! Catalog operations for the Scheduler.
//!
//! All read-only; the catalog is immutable at runtime.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulerError},
    models::{Provider, Service},
};

impl Scheduler {
    /// Lists all services in the catalog.
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_services()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a service by id, or an error if it does not resolve.
    pub async fn get_service(&self, id: u64) -> Result<Service> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_service(id)?
                .ok_or(SchedulerError::ServiceNotFound { id })
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all providers in the catalog.
    pub async fn list_providers(&self) -> Result<Vec<Provider>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_providers()
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a provider by id, or an error if it does not resolve.
    pub async fn get_provider(&self, id: u64) -> Result<Provider> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_provider(id)?
                .ok_or(SchedulerError::ProviderNotFound { id })
        })
        .await
        .map_err(|e| SchedulerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
