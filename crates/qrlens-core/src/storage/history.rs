//! Scan history storage
//!
//! History holds one row per distinct payload, most recent first. The
//! `is_favorite` flag of returned records is read from the favorites table.

use crate::record::ScanRecord;
use crate::storage::db::DatabaseError;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

const SELECT_RECORD: &str = r"
    SELECT s.record, EXISTS(SELECT 1 FROM favorites f WHERE f.data = s.data)
    FROM scans s
";

/// History storage operations
pub struct HistoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryStore<'a> {
    /// Create a new history store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a record at the front of history
    ///
    /// Any entry with the same payload (or id) is replaced, then history is
    /// truncated to the `cap` most recent entries.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written
    pub fn upsert_front(&self, record: &ScanRecord, cap: usize) -> Result<(), DatabaseError> {
        let json = stored_json(record)?;
        let tx = self.conn.unchecked_transaction()?;

        tx.execute(
            "DELETE FROM scans WHERE data = ?1 OR id = ?2",
            params![record.data, record.id.to_string()],
        )?;
        tx.execute(
            r"
            INSERT INTO scans (id, data, kind, record, scanned_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                record.id.to_string(),
                record.data,
                record.kind.as_str(),
                json,
                record.timestamp.to_rfc3339(),
            ],
        )?;
        let trimmed = tx.execute(
            r"
            DELETE FROM scans WHERE seq NOT IN (
                SELECT seq FROM scans ORDER BY seq DESC LIMIT ?1
            )
            ",
            params![to_sql_limit(Some(cap))],
        )?;

        tx.commit()?;

        if trimmed > 0 {
            tracing::debug!("Trimmed {trimmed} history entries beyond the cap");
        }
        Ok(())
    }

    /// Replace the stored copy of a record, keeping its position
    ///
    /// # Errors
    /// Returns an error if the record cannot be written
    pub fn update(&self, record: &ScanRecord) -> Result<bool, DatabaseError> {
        let json = stored_json(record)?;
        let updated = self.conn.execute(
            "UPDATE scans SET record = ?1, kind = ?2 WHERE id = ?3",
            params![json, record.kind.as_str(), record.id.to_string()],
        )?;
        Ok(updated > 0)
    }

    /// List history, most recent first
    ///
    /// # Errors
    /// Returns an error if history cannot be read
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<ScanRecord>, DatabaseError> {
        let sql = format!("{SELECT_RECORD} ORDER BY s.seq DESC LIMIT ?1");
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt.query_map(params![to_sql_limit(limit)], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (json, is_favorite) = row?;
            records.push(parse_record(&json, is_favorite)?);
        }
        Ok(records)
    }

    /// Get an entry by ID
    ///
    /// # Errors
    /// Returns an error if the entry cannot be read
    pub fn get(&self, id: Uuid) -> Result<Option<ScanRecord>, DatabaseError> {
        self.query_one(&format!("{SELECT_RECORD} WHERE s.id = ?1"), &id.to_string())
    }

    /// Get the entry holding a payload
    ///
    /// # Errors
    /// Returns an error if the entry cannot be read
    pub fn find_by_data(&self, data: &str) -> Result<Option<ScanRecord>, DatabaseError> {
        self.query_one(&format!("{SELECT_RECORD} WHERE s.data = ?1"), data)
    }

    /// Delete an entry
    ///
    /// # Errors
    /// Returns an error if the entry cannot be deleted
    pub fn delete(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let deleted = self
            .conn
            .execute("DELETE FROM scans WHERE id = ?1", params![id.to_string()])?;
        Ok(deleted > 0)
    }

    /// Remove every entry, returning how many were removed
    ///
    /// # Errors
    /// Returns an error if history cannot be cleared
    pub fn clear(&self) -> Result<usize, DatabaseError> {
        Ok(self.conn.execute("DELETE FROM scans", [])?)
    }

    /// Number of entries
    ///
    /// # Errors
    /// Returns an error if the count fails
    pub fn count(&self) -> Result<usize, DatabaseError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scans", [], |row| row.get(0))?;
        usize::try_from(count).map_err(|e| DatabaseError::InvalidData(e.to_string()))
    }

    fn query_one(&self, sql: &str, key: &str) -> Result<Option<ScanRecord>, DatabaseError> {
        let row = self
            .conn
            .query_row(sql, params![key], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, bool>(1)?))
            })
            .optional()?;

        match row {
            Some((json, is_favorite)) => Ok(Some(parse_record(&json, is_favorite)?)),
            None => Ok(None),
        }
    }
}

/// Serialize a record for storage, without its derived favorite flag
pub(crate) fn stored_json(record: &ScanRecord) -> Result<String, DatabaseError> {
    let mut stored = record.clone();
    stored.is_favorite = false;
    Ok(serde_json::to_string(&stored)?)
}

pub(crate) fn parse_record(json: &str, is_favorite: bool) -> Result<ScanRecord, DatabaseError> {
    let mut record: ScanRecord = serde_json::from_str(json)
        .map_err(|e| DatabaseError::InvalidData(format!("Failed to parse scan record: {e}")))?;
    record.is_favorite = is_favorite;
    Ok(record)
}

/// `SQLite` treats a negative LIMIT as "no limit"
fn to_sql_limit(limit: Option<usize>) -> i64 {
    limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX))
}
