//! Storage layer (`SQLite`)

pub mod db;
pub mod favorites;
pub mod history;
pub mod migrations;
pub mod settings;

pub use db::{Database, DatabaseError};
pub use favorites::FavoriteStore;
pub use history::HistoryStore;
pub use settings::SettingsStore;
