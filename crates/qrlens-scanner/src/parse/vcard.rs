//! vCard (`BEGIN:VCARD`) parser
//!
//! Only the properties a scan result displays are extracted. Property
//! parameters (`TEL;TYPE=CELL:`) are ignored and folded lines are joined.

use super::split_unescaped;
use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// Contact fields extracted from a vCard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub formatted_name: Option<String>,
    /// Structured name rendered as "Given Family"
    pub name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub url: Option<String>,
    pub address: Option<String>,
}

impl ContactCard {
    /// Parse a vCard payload
    ///
    /// # Errors
    /// Returns an error if the card does not start with `BEGIN:VCARD`
    pub fn parse(data: &str) -> ScanResult<Self> {
        if !data.starts_with("BEGIN:VCARD") {
            return Err(ScanError::InvalidContact("missing BEGIN:VCARD".into()));
        }

        let mut card = ContactCard::default();

        for line in unfold(data) {
            let Some((head, value)) = line.split_once(':') else {
                continue;
            };
            let property = head.split(';').next().unwrap_or_default().to_uppercase();
            // Grouped properties look like `item1.EMAIL`
            let property = property.rsplit('.').next().unwrap_or_default();

            match property {
                "FN" => card.formatted_name = non_empty(unescape(value)),
                "N" => card.name = structured_name(value),
                "ORG" => {
                    let units: Vec<String> = split_unescaped(value, ';', true)
                        .into_iter()
                        .filter(|s| !s.is_empty())
                        .collect();
                    card.organization = non_empty(units.join(", "));
                }
                "TITLE" => card.title = non_empty(unescape(value)),
                "TEL" => card.phones.extend(non_empty(unescape(value))),
                "EMAIL" => card.emails.extend(non_empty(unescape(value))),
                "URL" => card.url = non_empty(unescape(value)),
                "ADR" => {
                    let parts: Vec<String> = split_unescaped(value, ';', true)
                        .into_iter()
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    card.address = non_empty(parts.join(", "));
                }
                _ => {}
            }
        }

        Ok(card)
    }

    /// Best name to show: `FN`, falling back to `N`
    pub fn display_name(&self) -> Option<&str> {
        self.formatted_name.as_deref().or(self.name.as_deref())
    }
}

/// Join continuation lines (leading space or tab) onto the previous line
fn unfold(data: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in data.lines() {
        if let Some(rest) = raw.strip_prefix([' ', '\t']) {
            if let Some(last) = lines.last_mut() {
                last.push_str(rest);
                continue;
            }
        }
        lines.push(raw.to_string());
    }
    lines
}

fn unescape(value: &str) -> String {
    split_unescaped(value, '\0', true).concat()
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `N:Family;Given;Additional;Prefix;Suffix` → "Prefix Given Additional Family Suffix"
fn structured_name(value: &str) -> Option<String> {
    let parts = split_unescaped(value, ';', true);
    let get = |i: usize| parts.get(i).map(|s| s.trim()).unwrap_or_default();
    let ordered = [get(3), get(1), get(2), get(0), get(4)];
    let joined: Vec<&str> = ordered.into_iter().filter(|s| !s.is_empty()).collect();
    non_empty(joined.join(" "))
}
