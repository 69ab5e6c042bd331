//! Scan library: history, favorites and selection
//!
//! Favorite status lives only in the favorites table. Every record handed
//! out by the library has `is_favorite` computed from it, so history,
//! favorites and a selected record can never disagree.

use crate::record::{FoodProduct, ScanRecord};
use crate::settings::AppSettings;
use crate::storage::{DatabaseError, FavoriteStore, HistoryStore, SettingsStore};
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of history entries kept
pub const HISTORY_CAP: usize = 100;

/// Errors from library operations
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Scan not found: {0}")]
    NotFound(String),
}

/// Result type for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// High-level scan operations over a database connection
pub struct ScanLibrary<'a> {
    conn: &'a Connection,
    history_cap: usize,
}

impl<'a> ScanLibrary<'a> {
    /// Create a library with the default history cap
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            history_cap: HISTORY_CAP,
        }
    }

    /// Override the history cap
    #[must_use]
    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    fn history_store(&self) -> HistoryStore<'a> {
        HistoryStore::new(self.conn)
    }

    fn favorite_store(&self) -> FavoriteStore<'a> {
        FavoriteStore::new(self.conn)
    }

    /// Record freshly decoded text
    ///
    /// # Errors
    /// Returns an error if history cannot be written
    pub fn record_scan(&self, data: &str) -> LibraryResult<ScanRecord> {
        self.record(ScanRecord::new(data))
    }

    /// Record a scan at the front of history
    ///
    /// An older entry with the same payload is dropped and history is
    /// trimmed to the cap. The returned record carries its favorite status.
    ///
    /// # Errors
    /// Returns an error if history cannot be written
    pub fn record(&self, mut record: ScanRecord) -> LibraryResult<ScanRecord> {
        record.is_favorite = self.favorite_store().contains(&record.data)?;
        self.history_store()
            .upsert_front(&record, self.history_cap)?;
        tracing::info!(id = %record.id, kind = %record.kind, "Recorded scan");
        Ok(record)
    }

    /// Flip favorite status for a record's payload, returning the new status
    ///
    /// # Errors
    /// Returns an error if favorites cannot be updated
    pub fn toggle_favorite(&self, record: &ScanRecord) -> LibraryResult<bool> {
        let favorites = self.favorite_store();
        if favorites.contains(&record.data)? {
            favorites.remove(&record.data)?;
            tracing::debug!(id = %record.id, "Removed favorite");
            Ok(false)
        } else {
            favorites.add(record)?;
            tracing::debug!(id = %record.id, "Added favorite");
            Ok(true)
        }
    }

    /// Flip favorite status for a scan by ID
    ///
    /// # Errors
    /// Returns an error if the scan does not exist or favorites cannot be
    /// updated
    pub fn toggle_favorite_by_id(&self, id: Uuid) -> LibraryResult<ScanRecord> {
        let mut record = self
            .select(id)?
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        record.is_favorite = self.toggle_favorite(&record)?;
        Ok(record)
    }

    /// History, most recent first
    ///
    /// # Errors
    /// Returns an error if history cannot be read
    pub fn history(&self, limit: Option<usize>) -> LibraryResult<Vec<ScanRecord>> {
        Ok(self.history_store().list(limit)?)
    }

    /// Favorites, most recently added first
    ///
    /// # Errors
    /// Returns an error if favorites cannot be read
    pub fn favorites(&self) -> LibraryResult<Vec<ScanRecord>> {
        Ok(self.favorite_store().list()?)
    }

    /// Look up a scan by ID in history, then in favorites
    ///
    /// # Errors
    /// Returns an error if storage cannot be read
    pub fn select(&self, id: Uuid) -> LibraryResult<Option<ScanRecord>> {
        if let Some(record) = self.history_store().get(id)? {
            return Ok(Some(record));
        }
        Ok(self.favorite_store().get(id)?)
    }

    /// Look up a scan by ID, failing if it does not exist
    ///
    /// # Errors
    /// Returns `NotFound` if no scan has this ID
    pub fn require(&self, id: Uuid) -> LibraryResult<ScanRecord> {
        self.select(id)?
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    /// Resolve a full ID or a unique ID prefix
    ///
    /// # Errors
    /// Returns `NotFound` if nothing (or more than one scan) matches
    pub fn resolve(&self, identifier: &str) -> LibraryResult<ScanRecord> {
        if let Ok(id) = Uuid::parse_str(identifier) {
            return self.require(id);
        }

        let needle = identifier.to_lowercase();
        if needle.is_empty() {
            return Err(LibraryError::NotFound(identifier.to_string()));
        }

        let mut matches: Vec<ScanRecord> = self
            .history(None)?
            .into_iter()
            .chain(self.favorites()?)
            .filter(|r| r.id.to_string().starts_with(&needle))
            .collect();
        matches.sort_by_key(|r| r.id);
        matches.dedup_by_key(|r| r.id);

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(LibraryError::NotFound(identifier.to_string())),
            n => Err(LibraryError::NotFound(format!(
                "{identifier} (ambiguous, matches {n} scans)"
            ))),
        }
    }

    /// Store product data on a scan
    ///
    /// Both the history entry and any favorite snapshot are updated.
    ///
    /// # Errors
    /// Returns `NotFound` if the scan does not exist
    pub fn attach_product(&self, id: Uuid, product: FoodProduct) -> LibraryResult<ScanRecord> {
        let mut record = self.require(id)?;
        record.product = Some(product);

        self.history_store().update(&record)?;
        self.favorite_store().update(&record)?;
        Ok(record)
    }

    /// Remove one history entry; favorites are untouched
    ///
    /// # Errors
    /// Returns an error if history cannot be written
    pub fn delete(&self, id: Uuid) -> LibraryResult<bool> {
        Ok(self.history_store().delete(id)?)
    }

    /// Clear history; favorites are untouched
    ///
    /// # Errors
    /// Returns an error if history cannot be cleared
    pub fn clear_history(&self) -> LibraryResult<usize> {
        let removed = self.history_store().clear()?;
        tracing::info!("Cleared {removed} history entries");
        Ok(removed)
    }

    /// Current settings
    ///
    /// # Errors
    /// Returns an error if settings cannot be read
    pub fn settings(&self) -> LibraryResult<AppSettings> {
        Ok(SettingsStore::new(self.conn).load()?)
    }

    /// Persist settings
    ///
    /// # Errors
    /// Returns an error if settings cannot be written
    pub fn save_settings(&self, settings: &AppSettings) -> LibraryResult<()> {
        Ok(SettingsStore::new(self.conn).save(settings)?)
    }
}
