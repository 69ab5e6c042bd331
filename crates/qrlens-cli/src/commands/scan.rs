//! Scan CLI commands
//!
//! Handles: qrlens scan/record/classify/lookup/insight/open/copy

use clap::Args;
use serde_json::json;
use std::io::BufRead;
use std::path::PathBuf;

use qrlens_core::{ScanLibrary, ScanRecord};
use qrlens_providers::{
    analyze_or_fallback, lookup_or_none, GeminiClient, InsightProvider, OpenFoodFactsClient,
    ProductLookup, ProviderConfig,
};
use qrlens_scanner::{decode_image, PayloadDetails, PayloadKind};

use crate::{context, feedback, render};

/// Options shared by `scan` and `record`
#[derive(Args, Debug, Default)]
pub struct ScanOptions {
    /// Skip the product lookup for barcodes
    #[arg(long)]
    pub no_enrich: bool,
    /// Skip the AI insight even when enabled in settings
    #[arg(long)]
    pub no_insight: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `record`
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Decoded payloads; "-" reads one payload per line from stdin
    #[arg(value_name = "TEXT", required = true)]
    pub payloads: Vec<String>,

    #[command(flatten)]
    pub options: ScanOptions,
}

/// A recorded scan ready for output
struct ScanOutcome {
    record: ScanRecord,
    insight: Option<String>,
}

/// Decode images and run every code through the scan pipeline
pub async fn execute_scan(
    images: &[PathBuf],
    options: &ScanOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut payloads = Vec::new();
    for image in images {
        let codes = decode_image(image)?;
        if codes.is_empty() {
            eprintln!("No QR code found in {}", image.display());
        }
        payloads.extend(codes.into_iter().map(|code| code.text));
    }

    if payloads.is_empty() {
        return Err("No codes decoded".into());
    }

    process_payloads(payloads, options).await
}

/// Record text decoded elsewhere
pub async fn execute_record(args: ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let payloads = if args.payloads.len() == 1 && args.payloads[0] == "-" {
        read_stdin_payloads()?
    } else {
        args.payloads
    };

    if payloads.is_empty() {
        return Err("No payloads to record".into());
    }

    process_payloads(payloads, &args.options).await
}

fn read_stdin_payloads() -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut payloads = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            payloads.push(line.to_string());
        }
    }
    Ok(payloads)
}

/// Record, give feedback, enrich, and print each payload
async fn process_payloads(
    payloads: Vec<String>,
    options: &ScanOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());
    let settings = library.settings()?;
    let config = ProviderConfig::from_env();

    let products = if options.no_enrich {
        None
    } else {
        Some(OpenFoodFactsClient::from_config(&config)?)
    };
    let insights = if options.no_insight || !settings.ai_analysis {
        None
    } else {
        Some(GeminiClient::from_config(&config)?)
    };

    let mut outcomes = Vec::with_capacity(payloads.len());
    for data in payloads {
        let mut record = library.record_scan(&data)?;
        feedback::scan_success(&settings);

        if record.kind == PayloadKind::Barcode {
            if let Some(client) = &products {
                if let Some(product) = lookup_or_none(client, &record.data).await {
                    record = library.attach_product(record.id, product)?;
                }
            }
        }

        let insight = match &insights {
            Some(client) => Some(analyze_or_fallback(client, &record.data).await),
            None => None,
        };

        if let Some(target) = feedback::auto_open_target(&settings, &record) {
            if let Err(e) = feedback::open_url(&target) {
                tracing::warn!("Could not open {target}: {e}");
            }
        }

        outcomes.push(ScanOutcome { record, insight });
    }

    if options.json {
        let output: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|o| {
                json!({
                    "record": o.record,
                    "details": PayloadDetails::from_payload(&o.record.data),
                    "insight": o.insight,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let sheets: Vec<String> = outcomes
            .iter()
            .map(|o| render::result_sheet(&o.record, o.insight.as_deref()))
            .collect();
        print!("{}", sheets.join("\n"));
    }

    Ok(())
}

/// Show classification and parsed details without recording
pub fn execute_classify(text: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let details = PayloadDetails::from_payload(text);
    let kind = qrlens_scanner::classify(text);

    if json_output {
        let output = json!({
            "kind": kind,
            "details": details,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{kind}: {}", details.summary());
    }
    Ok(())
}

/// Product lookup without recording
pub async fn execute_lookup(
    barcode: &str,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = OpenFoodFactsClient::from_config(&ProviderConfig::from_env())?;
    let product = client.lookup(barcode).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    match product {
        Some(product) => print!("{}", render::product_sheet(&product)),
        None => println!("No product found for {barcode}."),
    }
    Ok(())
}

/// AI insight for a recorded scan; errors are reported, not masked
pub async fn execute_insight(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());
    let record = library.resolve(id)?;

    let client = GeminiClient::from_config(&ProviderConfig::from_env())?;
    let text = client.analyze(&record.data).await?;
    println!("{text}");
    Ok(())
}

/// Open a scan's link or product page
pub fn execute_open(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());
    let record = library.resolve(id)?;

    let target = record
        .open_target()
        .ok_or_else(|| format!("Nothing to open for {} scans", record.kind))?;
    feedback::open_url(&target)?;
    println!("Opened {target}");
    Ok(())
}

/// Copy a scan's payload to the clipboard
pub fn execute_copy(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = context::open_database()?;
    let library = ScanLibrary::new(db.connection());
    let record = library.resolve(id)?;

    feedback::copy_text(&record.data)?;
    println!("Copied: {}", render::truncate(&record.data, 60));
    Ok(())
}
