//! Database operations and SQLite management for the reservation store.
//!
//! This module provides the low-level storage layer: SQLite connection
//! handling, schema initialization with catalog seeding, read-only catalog
//! queries, and reservation CRUD with the unified slot-conflict check. The
//! scheduling invariants themselves are enforced one layer up, in
//! [`crate::scheduler`], but the check-then-act sequences run here inside
//! single transactions so they are atomic with respect to other writers.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod catalog_queries;
pub mod reservation_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    ///
    /// Schema creation is idempotent and seeds the catalog tables on first
    /// run.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}
