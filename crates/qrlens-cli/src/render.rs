//! Terminal rendering for scan results

use qrlens_core::{FoodProduct, ScanRecord};
use qrlens_scanner::PayloadDetails;
use std::fmt::Write;

const LIST_DATA_CHARS: usize = 56;

/// Full result sheet for one scan
pub fn result_sheet(record: &ScanRecord, insight: Option<&str>) -> String {
    let details = PayloadDetails::from_payload(&record.data);
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.data);
    let _ = writeln!(out, "  ID:       {}", record.id);
    let _ = writeln!(out, "  Type:     {} ({})", record.kind, details.summary());
    let _ = writeln!(
        out,
        "  Scanned:  {}",
        record.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "  Favorite: {}",
        if record.is_favorite { "yes" } else { "no" }
    );

    match &details {
        PayloadDetails::Wifi(wifi) => {
            let _ = writeln!(out, "  Network:  {}", wifi.ssid);
            let _ = writeln!(out, "  Security: {}", wifi.auth);
            if let Some(password) = &wifi.password {
                let _ = writeln!(out, "  Password: {password}");
            }
        }
        PayloadDetails::Contact(card) => {
            if let Some(org) = &card.organization {
                let _ = writeln!(out, "  Org:      {org}");
            }
            for phone in &card.phones {
                let _ = writeln!(out, "  Phone:    {phone}");
            }
            for email in &card.emails {
                let _ = writeln!(out, "  Email:    {email}");
            }
        }
        _ => {}
    }

    if let Some(product) = &record.product {
        out.push_str(&product_sheet(product));
    }

    if let Some(target) = record.open_target() {
        let _ = writeln!(out, "  Open:     {target}");
    }

    if let Some(insight) = insight {
        let _ = writeln!(out, "  AI insight:");
        for line in insight.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }

    out
}

/// Product block, indented for a result sheet
pub fn product_sheet(product: &FoodProduct) -> String {
    let mut out = String::new();
    let name = product.product_name.as_deref().unwrap_or("Unknown Product");
    let brand = product.brands.as_deref().unwrap_or("Unknown Brand");

    let _ = write!(out, "  Product:  {name} ({brand})");
    if let Some(quantity) = &product.quantity {
        let _ = write!(out, ", {quantity}");
    }
    out.push('\n');

    let grade = |g: Option<char>| g.map_or_else(|| "N/A".to_string(), |c| c.to_ascii_uppercase().to_string());
    let _ = writeln!(
        out,
        "  Scores:   Nutri-Score {}, Eco-Score {}",
        grade(product.nutriscore()),
        grade(product.ecoscore())
    );

    if let Some(n) = &product.nutriments {
        let value = |v: Option<f64>| v.unwrap_or(0.0);
        let _ = writeln!(
            out,
            "  Per 100g: energy {} kJ, fat {}g, sugar {}g, salt {}g, protein {}g",
            value(n.energy_100g),
            value(n.fat_100g),
            value(n.sugars_100g),
            value(n.salt_100g),
            value(n.proteins_100g)
        );
    }
    if let Some(allergens) = product.allergens.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "  Allergens: {allergens}");
    }
    let _ = writeln!(
        out,
        "  Origin:   {}",
        product.countries.as_deref().unwrap_or("Unknown")
    );
    out
}

/// One line in a history or favorites listing
pub fn list_line(record: &ScanRecord) -> String {
    let short_id: String = record.id.to_string().chars().take(8).collect();
    let star = if record.is_favorite { "*" } else { " " };
    let label = record.product_name().unwrap_or(&record.data);
    format!(
        "  {short_id} {} {star} [{:<7}] {}",
        record.timestamp.format("%Y-%m-%d"),
        record.kind.as_str(),
        truncate(label, LIST_DATA_CHARS)
    )
}

pub fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() > max {
        let cut: String = flat.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        flat
    }
}
