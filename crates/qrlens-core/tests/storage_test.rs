//! Storage tests
//!
//! Exercises the stores directly, including on-disk persistence.

use qrlens_core::storage::{Database, FavoriteStore, HistoryStore, SettingsStore};
use qrlens_core::{AppSettings, ScanRecord, SettingKey};
use rusqlite::params;
use tempfile::TempDir;

#[test]
fn test_history_persists_across_reopen() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("qrlens.db");

    let record = ScanRecord::new("https://example.com");
    {
        let db = Database::open(&path).expect("Failed to open database");
        HistoryStore::new(db.connection())
            .upsert_front(&record, 100)
            .unwrap();
    }

    let db = Database::open(&path).expect("Failed to reopen database");
    let store = HistoryStore::new(db.connection());
    let loaded = store.get(record.id).unwrap().expect("Record missing");
    assert_eq!(loaded.data, record.data);
    assert_eq!(loaded.timestamp, record.timestamp);
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_file_database_uses_wal() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(&temp.path().join("qrlens.db")).expect("Failed to open database");

    let mode: String = db
        .connection()
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
    let synchronous: i64 = db
        .connection()
        .query_row("PRAGMA synchronous", [], |row| row.get(0))
        .unwrap();
    assert_eq!(synchronous, 1);
}

#[test]
fn test_find_by_data() {
    let db = Database::in_memory().expect("Failed to create database");
    let store = HistoryStore::new(db.connection());

    let record = ScanRecord::new("needle");
    store.upsert_front(&record, 10).unwrap();

    assert_eq!(store.find_by_data("needle").unwrap().unwrap().id, record.id);
    assert!(store.find_by_data("haystack").unwrap().is_none());
}

#[test]
fn test_favorite_flag_is_not_stored() {
    let db = Database::in_memory().expect("Failed to create database");
    let history = HistoryStore::new(db.connection());

    let mut record = ScanRecord::new("stale flag");
    record.is_favorite = true;
    history.upsert_front(&record, 10).unwrap();

    // No favorites row, so the flag reads back false
    assert!(!history.get(record.id).unwrap().unwrap().is_favorite);
}

#[test]
fn test_favorite_add_is_idempotent() {
    let db = Database::in_memory().expect("Failed to create database");
    let favorites = FavoriteStore::new(db.connection());

    let record = ScanRecord::new("fav");
    assert!(favorites.add(&record).unwrap());
    assert!(!favorites.add(&ScanRecord::new("fav")).unwrap());
    assert_eq!(favorites.count().unwrap(), 1);
    assert!(favorites.contains("fav").unwrap());
    assert!(favorites.remove("fav").unwrap());
    assert!(!favorites.contains("fav").unwrap());
}

#[test]
fn test_favorite_update_moves_id_with_snapshot() {
    let db = Database::in_memory().expect("Failed to create database");
    let favorites = FavoriteStore::new(db.connection());

    let original = ScanRecord::new("fav");
    favorites.add(&original).unwrap();

    let rescanned = ScanRecord::new("fav");
    assert!(favorites.update(&rescanned).unwrap());
    assert!(favorites.get(original.id).unwrap().is_none());
    let loaded = favorites.get(rescanned.id).unwrap().expect("Favorite missing");
    assert_eq!(loaded.id, rescanned.id);
    assert!(loaded.is_favorite);

    assert!(!favorites.update(&ScanRecord::new("not a favorite")).unwrap());
}

#[test]
fn test_settings_default_when_missing() {
    let db = Database::in_memory().expect("Failed to create database");
    let store = SettingsStore::new(db.connection());
    assert_eq!(store.load().unwrap(), AppSettings::default());
}

#[test]
fn test_settings_save_and_overwrite() {
    let db = Database::in_memory().expect("Failed to create database");
    let store = SettingsStore::new(db.connection());

    let mut settings = AppSettings::default();
    settings.toggle(SettingKey::AutoOpenUrl);
    store.save(&settings).unwrap();
    settings.toggle(SettingKey::Vibrate);
    store.save(&settings).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.auto_open_url);
    assert!(!loaded.vibrate);
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let db = Database::in_memory().expect("Failed to create database");
    db.connection()
        .execute(
            "INSERT INTO settings (key, value, updated_at) VALUES ('app', ?1, '')",
            params!["not json"],
        )
        .unwrap();

    let loaded = SettingsStore::new(db.connection()).load().unwrap();
    assert_eq!(loaded, AppSettings::default());
}
