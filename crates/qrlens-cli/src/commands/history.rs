//! History CLI commands
//!
//! Handles: qrlens history list/show/delete/clear/export

use clap::{Subcommand, ValueEnum};
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;

use qrlens_core::export::{to_json, to_markdown};
use qrlens_core::ScanLibrary;

use crate::{context, render};

/// History commands
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent scans, newest first
    List {
        /// Maximum number of entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one scan in full
    Show {
        /// Scan ID (or unique prefix)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete one scan from history
    Delete {
        /// Scan ID (or unique prefix)
        id: String,
    },
    /// Clear all history (favorites are kept)
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Export history
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Json,
    Markdown,
}

/// Execute history command
pub fn execute(cmd: HistoryCommands) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());

    match cmd {
        HistoryCommands::List { limit, json } => {
            let records = library.history(limit)?;
            if json {
                let output = json!({
                    "count": records.len(),
                    "scans": records,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if records.is_empty() {
                println!("No scans yet.");
            } else {
                println!("History ({} items):", records.len());
                for record in &records {
                    println!("{}", render::list_line(record));
                }
            }
        }
        HistoryCommands::Show { id, json } => {
            let record = library.resolve(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", render::result_sheet(&record, None));
            }
        }
        HistoryCommands::Delete { id } => {
            let record = library.resolve(&id)?;
            if library.delete(record.id)? {
                println!("Deleted scan: {}", record.id);
            } else {
                // Resolved through favorites only
                println!("Scan {} is not in history.", record.id);
            }
        }
        HistoryCommands::Clear { force } => {
            let count = library.history(None)?.len();
            if count == 0 {
                println!("History is already empty.");
                return Ok(());
            }

            if !force {
                print!("Clear all scan history ({count} items)? [y/N] ");
                io::stdout().flush()?;
                let mut input = String::new();
                io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let removed = library.clear_history()?;
            println!("Cleared {removed} scans.");
        }
        HistoryCommands::Export { format, output } => {
            let records = library.history(None)?;
            let content = match format {
                ExportFormat::Json => to_json(&records)?,
                ExportFormat::Markdown => to_markdown(&records),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    eprintln!("Exported {} scans to {}", records.len(), path.display());
                }
                None => println!("{content}"),
            }
        }
    }

    Ok(())
}
