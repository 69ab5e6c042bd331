//! Favorites CLI commands
//!
//! Handles: qrlens fav list/toggle

use clap::Subcommand;
use serde_json::json;

use qrlens_core::ScanLibrary;

use crate::{context, render};

/// Favorite commands
#[derive(Subcommand)]
pub enum FavCommands {
    /// List favorites, most recently added first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or remove a scan from favorites
    Toggle {
        /// Scan ID (or unique prefix)
        id: String,
    },
}

/// Execute favorite command
pub fn execute(cmd: FavCommands) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());

    match cmd {
        FavCommands::List { json } => {
            let records = library.favorites()?;
            if json {
                let output = json!({
                    "count": records.len(),
                    "favorites": records,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if records.is_empty() {
                println!("No favorites yet.");
            } else {
                println!("Favorites ({} items):", records.len());
                for record in &records {
                    println!("{}", render::list_line(record));
                }
            }
        }
        FavCommands::Toggle { id } => {
            let record = library.resolve(&id)?;
            let record = library.toggle_favorite_by_id(record.id)?;
            if record.is_favorite {
                println!("Added to favorites: {}", record.data);
            } else {
                println!("Removed from favorites: {}", record.data);
            }
        }
    }

    Ok(())
}
