//! Structured payload parsing
//!
//! Turns classified text into a typed view. Parsing is lenient: a payload
//! whose structure cannot be read degrades to plain text details.

mod vcard;
mod wifi;

pub use vcard::ContactCard;
pub use wifi::{WifiAuth, WifiConfig};

use crate::payload::{classify, PayloadKind};
use serde::{Deserialize, Serialize};

/// Retail barcode family, derived from the digit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbology {
    Ean8,
    UpcA,
    Ean13,
    Gtin14,
    Numeric,
}

impl Symbology {
    /// Guess the symbology from the number of digits
    pub fn from_len(len: usize) -> Self {
        match len {
            8 => Symbology::Ean8,
            12 => Symbology::UpcA,
            13 => Symbology::Ean13,
            14 => Symbology::Gtin14,
            _ => Symbology::Numeric,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcA => "UPC-A",
            Symbology::Ean13 => "EAN-13",
            Symbology::Gtin14 => "GTIN-14",
            Symbology::Numeric => "numeric",
        }
    }
}

/// Parsed view of a payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PayloadDetails {
    Url {
        host: Option<String>,
        secure: bool,
    },
    Wifi(WifiConfig),
    Contact(ContactCard),
    Barcode {
        symbology: Symbology,
        /// GS1 mod-10 check digit; `None` for lengths without one
        check_digit_valid: Option<bool>,
    },
    Text {
        chars: usize,
        lines: usize,
    },
}

impl PayloadDetails {
    /// Classify and parse a payload in one step
    pub fn from_payload(data: &str) -> Self {
        match classify(data) {
            PayloadKind::Url => PayloadDetails::Url {
                host: url_host(data),
                secure: data.starts_with("https://"),
            },
            PayloadKind::Wifi => match WifiConfig::parse(data) {
                Ok(config) => PayloadDetails::Wifi(config),
                Err(e) => {
                    tracing::debug!("Wi-Fi payload not parsed: {e}");
                    text_details(data)
                }
            },
            PayloadKind::Contact => match ContactCard::parse(data) {
                Ok(card) => PayloadDetails::Contact(card),
                Err(e) => {
                    tracing::debug!("Contact payload not parsed: {e}");
                    text_details(data)
                }
            },
            PayloadKind::Barcode => {
                let symbology = Symbology::from_len(data.len());
                let check_digit_valid = match symbology {
                    Symbology::Numeric => None,
                    _ => Some(gs1_check_digit_valid(data)),
                };
                PayloadDetails::Barcode {
                    symbology,
                    check_digit_valid,
                }
            }
            PayloadKind::Text => text_details(data),
        }
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        match self {
            PayloadDetails::Url { host, secure } => {
                let host = host.as_deref().unwrap_or("unknown host");
                if *secure {
                    format!("Link to {host}")
                } else {
                    format!("Link to {host} (not encrypted)")
                }
            }
            PayloadDetails::Wifi(config) => {
                let hidden = if config.hidden { ", hidden" } else { "" };
                format!("Wi-Fi network \"{}\" ({}{hidden})", config.ssid, config.auth)
            }
            PayloadDetails::Contact(card) => match card.display_name() {
                Some(name) => format!("Contact card for {name}"),
                None => "Contact card".to_string(),
            },
            PayloadDetails::Barcode {
                symbology,
                check_digit_valid,
            } => match check_digit_valid {
                Some(false) => format!("{} barcode (check digit mismatch)", symbology.label()),
                _ => format!("{} barcode", symbology.label()),
            },
            PayloadDetails::Text { chars, lines } => {
                if *lines > 1 {
                    format!("Text, {chars} characters on {lines} lines")
                } else {
                    format!("Text, {chars} characters")
                }
            }
        }
    }
}

fn text_details(data: &str) -> PayloadDetails {
    PayloadDetails::Text {
        chars: data.chars().count(),
        lines: data.lines().count().max(1),
    }
}

/// Extract the host part of an `http(s)://` URL
fn url_host(data: &str) -> Option<String> {
    let rest = data
        .strip_prefix("https://")
        .or_else(|| data.strip_prefix("http://"))?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = if host_port.starts_with('[') {
        // IPv6 literal keeps its brackets
        host_port.split_inclusive(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// GS1 mod-10 check: weights 3,1,3,... from the digit left of the check digit
fn gs1_check_digit_valid(digits: &str) -> bool {
    let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
    let Some((check, body)) = values.split_last() else {
        return false;
    };
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10 == *check
}

/// Split on an unescaped separator, resolving backslash escapes
///
/// With `newlines` set (vCard), `\n` and `\N` become a newline. Any other
/// escaped character is kept literally, as Wi-Fi payloads expect.
pub(crate) fn split_unescaped(input: &str, sep: char, newlines: bool) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n' | 'N') if newlines => current.push('\n'),
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            }
        } else if c == sep {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_host() {
        assert_eq!(url_host("https://Example.com/a?b"), Some("example.com".into()));
        assert_eq!(url_host("http://user:pw@host:8080/"), Some("host".into()));
        assert_eq!(url_host("http://[::1]:80/x"), Some("[::1]".into()));
        assert_eq!(url_host("https://"), None);
    }

    #[test]
    fn test_gs1_check_digit() {
        assert!(gs1_check_digit_valid("4006381333931"));
        assert!(!gs1_check_digit_valid("4006381333932"));
        assert!(gs1_check_digit_valid("96385074"));
        assert!(gs1_check_digit_valid("036000291452"));
    }

    #[test]
    fn test_split_unescaped() {
        assert_eq!(split_unescaped(r"a\;b;c", ';', false), vec!["a;b", "c"]);
        assert_eq!(split_unescaped(r"line\nnext", ';', true), vec!["line\nnext"]);
        assert_eq!(split_unescaped(r"line\nnext", ';', false), vec!["linennext"]);
        assert_eq!(split_unescaped("", ';', false), vec![""]);
        assert_eq!(split_unescaped(r"trailing\", ';', false), vec!["trailing\\"]);
    }
}
