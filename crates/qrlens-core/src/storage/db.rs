//! Database connection management

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

use super::migrations;

/// Database errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// Database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = Connection::open(path)?;

        // No table references another and history is capped at a few
        // hundred rows, so neither foreign_keys nor cache_size is set.
        // WAL lets `history list` read while a scan is being written
        conn.pragma_update(None, "journal_mode", "WAL")?;
        // NORMAL is durable enough under WAL for scan history
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        // Trim transactions build temp b-trees in memory
        conn.pragma_update(None, "temp_store", "MEMORY")?;

        migrations::run_migrations(&conn)?;
        tracing::debug!("Opened database at {}", path.display());

        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing)
    ///
    /// # Errors
    /// Returns an error if the database cannot be created
    pub fn in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the connection
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
