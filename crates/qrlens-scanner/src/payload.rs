//! Payload classification
//!
//! Decoded text is tagged by prefix checks, in a fixed order. The first
//! matching rule wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest digit run treated as a retail barcode (EAN-8)
pub const MIN_BARCODE_DIGITS: usize = 8;
/// Longest digit run treated as a retail barcode (GTIN-14)
pub const MAX_BARCODE_DIGITS: usize = 14;

/// Category of a decoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    /// `http://` or `https://` link
    Url,
    /// Anything that matches no other rule
    Text,
    /// 8 to 14 digit product code
    Barcode,
    /// `WIFI:` network credentials
    Wifi,
    /// `BEGIN:VCARD` contact card
    Contact,
}

impl PayloadKind {
    /// Lowercase name used in storage and output
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::Url => "url",
            PayloadKind::Text => "text",
            PayloadKind::Barcode => "barcode",
            PayloadKind::Wifi => "wifi",
            PayloadKind::Contact => "contact",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "url" => Ok(PayloadKind::Url),
            "text" => Ok(PayloadKind::Text),
            "barcode" => Ok(PayloadKind::Barcode),
            "wifi" => Ok(PayloadKind::Wifi),
            "contact" => Ok(PayloadKind::Contact),
            _ => Err(format!("Invalid payload kind: {s}")),
        }
    }
}

/// Classify decoded text
///
/// The text is taken verbatim: no trimming, case-sensitive prefixes.
pub fn classify(data: &str) -> PayloadKind {
    if data.starts_with("http://") || data.starts_with("https://") {
        PayloadKind::Url
    } else if data.starts_with("WIFI:") {
        PayloadKind::Wifi
    } else if data.starts_with("BEGIN:VCARD") {
        PayloadKind::Contact
    } else if is_barcode_digits(data) {
        PayloadKind::Barcode
    } else {
        PayloadKind::Text
    }
}

/// True if `data` is a run of 8 to 14 ASCII digits
pub fn is_barcode_digits(data: &str) -> bool {
    (MIN_BARCODE_DIGITS..=MAX_BARCODE_DIGITS).contains(&data.len())
        && data.bytes().all(|b| b.is_ascii_digit())
}
