//! qrlens CLI - scan QR codes and barcodes from the command line
//!
//! Provides `qrlens scan`, `qrlens record`, `qrlens history`, `qrlens fav`,
//! `qrlens settings`, the enrichment commands and `qrlens copy`.

mod commands;
mod context;
mod feedback;
mod render;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::favorites::FavCommands;
use commands::history::HistoryCommands;
use commands::scan::{ScanArgs, ScanOptions};
use commands::settings::SettingsCommands;

#[derive(Parser)]
#[command(name = "qrlens")]
#[command(about = "qrlens - QR code and barcode scanner")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode QR codes from image files and record them
    Scan {
        /// Image files (PNG, JPEG, ...)
        #[arg(value_name = "IMAGE", required = true)]
        images: Vec<std::path::PathBuf>,

        #[command(flatten)]
        options: ScanOptions,
    },
    /// Record text already decoded by another scanner ("-" reads stdin)
    Record(ScanArgs),
    /// Show how a payload would be classified, without recording it
    Classify {
        /// Payload text
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage scan history
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavCommands,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Look up product data for a barcode without recording it
    Lookup {
        /// Barcode digits
        barcode: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the AI assistant about a recorded scan
    Insight {
        /// Scan ID (or unique prefix)
        id: String,
    },
    /// Open a scan's link (or product page) in the browser
    Open {
        /// Scan ID (or unique prefix)
        id: String,
    },
    /// Copy a scan's content to the clipboard
    Copy {
        /// Scan ID (or unique prefix)
        id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Scan { images, options } => commands::scan::execute_scan(&images, &options).await,
        Commands::Record(args) => commands::scan::execute_record(args).await,
        Commands::Classify { text, json } => commands::scan::execute_classify(&text, json),
        Commands::History { action } => commands::history::execute(action),
        Commands::Fav { action } => commands::favorites::execute(action),
        Commands::Settings { action } => commands::settings::execute(action),
        Commands::Lookup { barcode, json } => commands::scan::execute_lookup(&barcode, json).await,
        Commands::Insight { id } => commands::scan::execute_insight(&id).await,
        Commands::Open { id } => commands::scan::execute_open(&id),
        Commands::Copy { id } => commands::scan::execute_copy(&id),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON on stdout stays clean
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
