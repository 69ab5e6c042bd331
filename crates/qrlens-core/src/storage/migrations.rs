//! Database migrations

use rusqlite::Connection;

use super::db::DatabaseError;

const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations
///
/// # Errors
/// Returns an error if migrations fail or the database is newer than
/// this build
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version > CURRENT_VERSION {
        return Err(DatabaseError::Migration(format!(
            "Database schema version {version} is newer than supported version {CURRENT_VERSION}"
        )));
    }

    if version < 1 {
        tracing::info!("Migrating database to schema v1");
        migrate_v1(conn)?;
    }

    conn.pragma_update(None, "user_version", CURRENT_VERSION)?;
    Ok(())
}

fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        r"
        -- Scan history, one row per distinct payload
        -- seq orders entries: highest is most recent
        CREATE TABLE IF NOT EXISTS scans (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            data TEXT NOT NULL UNIQUE,
            kind TEXT NOT NULL,
            record TEXT NOT NULL,
            scanned_at TEXT NOT NULL
        );

        -- Favorites, keyed by payload; the only source of favorite status
        CREATE TABLE IF NOT EXISTS favorites (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL,
            data TEXT NOT NULL UNIQUE,
            record TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        -- Key/value JSON documents (application settings)
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_favorites_id ON favorites(id);
        ",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn test_rejects_newer_schema() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", CURRENT_VERSION + 1)
            .unwrap();
        assert!(matches!(
            run_migrations(&conn),
            Err(DatabaseError::Migration(_))
        ));
    }
}
