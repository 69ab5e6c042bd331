//! `WIFI:` payload parser
//!
//! Format: `WIFI:T:WPA;S:network;P:secret;H:true;;` with fields in any order
//! and backslash escapes for `;`, `,`, `:`, `\` and `"`.

use super::split_unescaped;
use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wi-Fi authentication type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifiAuth {
    Wpa,
    Wep,
    /// WPA2/3 enterprise (`WPA2-EAP`)
    Eap,
    /// Open network
    Nopass,
    Other(String),
}

impl WifiAuth {
    fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "WPA" | "WPA2" | "WPA3" | "SAE" => WifiAuth::Wpa,
            "WEP" => WifiAuth::Wep,
            "WPA2-EAP" | "EAP" => WifiAuth::Eap,
            "" | "NOPASS" => WifiAuth::Nopass,
            _ => WifiAuth::Other(value.to_string()),
        }
    }
}

impl fmt::Display for WifiAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiAuth::Wpa => f.write_str("WPA"),
            WifiAuth::Wep => f.write_str("WEP"),
            WifiAuth::Eap => f.write_str("WPA2-EAP"),
            WifiAuth::Nopass => f.write_str("open"),
            WifiAuth::Other(other) => f.write_str(other),
        }
    }
}

/// Credentials carried by a Wi-Fi QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiConfig {
    pub ssid: String,
    pub auth: WifiAuth,
    pub password: Option<String>,
    pub hidden: bool,
}

impl WifiConfig {
    /// Parse a `WIFI:` payload
    ///
    /// # Errors
    /// Returns an error if the prefix or the `S` (SSID) field is missing
    pub fn parse(data: &str) -> ScanResult<Self> {
        let body = data
            .strip_prefix("WIFI:")
            .ok_or_else(|| ScanError::InvalidWifi("missing WIFI: prefix".into()))?;

        let mut ssid = None;
        let mut auth = WifiAuth::Nopass;
        let mut password = None;
        let mut hidden = false;

        for field in split_unescaped(body, ';', false) {
            let Some((key, value)) = field.split_once(':') else {
                continue;
            };
            match key.to_uppercase().as_str() {
                "S" => ssid = Some(value.to_string()),
                "T" => auth = WifiAuth::parse(value),
                "P" if !value.is_empty() => password = Some(value.to_string()),
                "H" => hidden = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        let ssid = ssid.ok_or_else(|| ScanError::InvalidWifi("missing SSID".into()))?;

        Ok(Self {
            ssid,
            auth,
            password,
            hidden,
        })
    }
}
