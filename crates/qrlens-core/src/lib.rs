//! qrlens Core - scan records, library and storage
//!
//! This crate owns scan history, favorites and settings, persisted in
//! `SQLite`, plus export formatting for history.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod export;
pub mod library;
pub mod record;
pub mod settings;
pub mod storage;

pub use qrlens_scanner;

pub use library::{LibraryError, ScanLibrary, HISTORY_CAP};
pub use record::{FoodProduct, Nutriments, ScanRecord};
pub use settings::{AppSettings, SettingKey};
