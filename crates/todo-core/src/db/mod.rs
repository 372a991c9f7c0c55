//! Database operations and SQLite management for todo items.
//!
//! This module provides the low-level, synchronous storage layer: a
//! [`Database`] owns exactly one SQLite connection, and every query is a
//! single parameterized statement. The async repository in
//! [`crate::repository`] opens one `Database` per call and drops it when the
//! call ends.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod schema;
pub mod todo_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::open(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a connection to an already initialized database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Ok(Self { connection })
    }
}
