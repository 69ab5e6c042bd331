//! Data directory and database access

use anyhow::{Context, Result};
use qrlens_core::storage::Database;
use std::path::PathBuf;

const DB_FILE: &str = "qrlens.db";

/// Resolve the data directory
///
/// `$QRLENS_HOME` wins; otherwise `~/.qrlens`, with `$HOME` and
/// `$USERPROFILE` checked before the platform home lookup.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("QRLENS_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("Cannot determine home directory (set QRLENS_HOME)")?;
    Ok(home.join(".qrlens"))
}

/// Open the database, creating the data directory on first use
pub fn open_database() -> Result<Database> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let path = dir.join(DB_FILE);
    Database::open(&path).with_context(|| format!("Failed to open database {}", path.display()))
}
