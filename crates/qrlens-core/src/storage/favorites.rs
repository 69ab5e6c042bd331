//! Favorites storage
//!
//! Favorites are keyed by payload and keep a snapshot of the record, so
//! they outlive history clearing and trimming.

use crate::record::ScanRecord;
use crate::storage::db::DatabaseError;
use crate::storage::history::{parse_record, stored_json};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

/// Favorite storage operations
pub struct FavoriteStore<'a> {
    conn: &'a Connection,
}

impl<'a> FavoriteStore<'a> {
    /// Create a new favorite store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add a record to the front of favorites
    ///
    /// Returns `false` if its payload is already a favorite.
    ///
    /// # Errors
    /// Returns an error if the favorite cannot be written
    pub fn add(&self, record: &ScanRecord) -> Result<bool, DatabaseError> {
        let json = stored_json(record)?;
        let inserted = self.conn.execute(
            r"
            INSERT OR IGNORE INTO favorites (id, data, record, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
            params![
                record.id.to_string(),
                record.data,
                json,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(inserted > 0)
    }

    /// Refresh the snapshot for a payload, if it is a favorite
    ///
    /// The ID column follows the snapshot, so a re-scanned favorite stays
    /// reachable under the ID it is listed with.
    ///
    /// # Errors
    /// Returns an error if the favorite cannot be written
    pub fn update(&self, record: &ScanRecord) -> Result<bool, DatabaseError> {
        let json = stored_json(record)?;
        let updated = self.conn.execute(
            "UPDATE favorites SET id = ?1, record = ?2 WHERE data = ?3",
            params![record.id.to_string(), json, record.data],
        )?;
        Ok(updated > 0)
    }

    /// Remove the favorite for a payload
    ///
    /// # Errors
    /// Returns an error if the favorite cannot be removed
    pub fn remove(&self, data: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .conn
            .execute("DELETE FROM favorites WHERE data = ?1", params![data])?;
        Ok(deleted > 0)
    }

    /// Whether a payload is a favorite
    ///
    /// # Errors
    /// Returns an error if the lookup fails
    pub fn contains(&self, data: &str) -> Result<bool, DatabaseError> {
        Ok(self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE data = ?1)",
            params![data],
            |row| row.get(0),
        )?)
    }

    /// Get a favorite by record ID
    ///
    /// # Errors
    /// Returns an error if the favorite cannot be read
    pub fn get(&self, id: Uuid) -> Result<Option<ScanRecord>, DatabaseError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT record FROM favorites WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        json.map(|json| parse_record(&json, true)).transpose()
    }

    /// List favorites, most recently added first
    ///
    /// # Errors
    /// Returns an error if favorites cannot be read
    pub fn list(&self) -> Result<Vec<ScanRecord>, DatabaseError> {
        let mut stmt = self
            .conn
            .prepare("SELECT record FROM favorites ORDER BY seq DESC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(parse_record(&row?, true)?);
        }
        Ok(records)
    }

    /// Number of favorites
    ///
    /// # Errors
    /// Returns an error if the count fails
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM favorites", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|e| DatabaseError::InvalidData(e.to_string()))
    }
}
