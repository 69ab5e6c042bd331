//! Settings storage

use crate::settings::AppSettings;
use crate::storage::db::DatabaseError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

const APP_SETTINGS_KEY: &str = "app";

/// Settings storage operations
pub struct SettingsStore<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsStore<'a> {
    /// Create a new settings store
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load settings, falling back to defaults
    ///
    /// A stored document that no longer parses is logged and ignored.
    ///
    /// # Errors
    /// Returns an error if the settings row cannot be read
    pub fn load(&self) -> Result<AppSettings, DatabaseError> {
        let json: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![APP_SETTINGS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = json else {
            return Ok(AppSettings::default());
        };

        match serde_json::from_str(&json) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!("Stored settings are unreadable, using defaults: {e}");
                Ok(AppSettings::default())
            }
        }
    }

    /// Persist settings
    ///
    /// # Errors
    /// Returns an error if the settings cannot be written
    pub fn save(&self, settings: &AppSettings) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(settings)?;
        self.conn.execute(
            r"
            INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            params![APP_SETTINGS_KEY, json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
