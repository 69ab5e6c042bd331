//! History export formatters

use crate::record::ScanRecord;

/// Longest payload shown in a Markdown table cell
const MAX_CELL_CHARS: usize = 60;

/// Convert records to a pretty JSON array
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(records: &[ScanRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Convert records to a Markdown report
#[must_use]
pub fn to_markdown(records: &[ScanRecord]) -> String {
    let mut output = String::new();

    output.push_str("# qrlens Scan History\n\n");

    if records.is_empty() {
        output.push_str("_No scans recorded_\n");
        return output;
    }

    let favorites = records.iter().filter(|r| r.is_favorite).count();
    output.push_str(&format!(
        "**Scans:** {} ({} favorite{})\n\n",
        records.len(),
        favorites,
        if favorites == 1 { "" } else { "s" }
    ));

    output.push_str("| Scanned | Type | Fav | Content | Product |\n");
    output.push_str("|---|---|---|---|---|\n");
    for record in records {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            record.timestamp.format("%Y-%m-%d %H:%M UTC"),
            record.kind,
            if record.is_favorite { "★" } else { "" },
            table_cell(&record.data),
            record.product_name().map(table_cell).unwrap_or_default(),
        ));
    }

    output
}

/// Escape and shorten text for a single table cell
fn table_cell(text: &str) -> String {
    let flat = text.replace(['\r', '\n'], " ").replace('|', "\\|");
    if flat.chars().count() > MAX_CELL_CHARS {
        let cut: String = flat.chars().take(MAX_CELL_CHARS - 1).collect();
        format!("{cut}…")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell_escapes_and_truncates() {
        assert_eq!(table_cell("a|b\nc"), "a\\|b c");
        let long = "x".repeat(100);
        let cell = table_cell(&long);
        assert_eq!(cell.chars().count(), MAX_CELL_CHARS);
        assert!(cell.ends_with('…'));
    }
}
