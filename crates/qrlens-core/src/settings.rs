//! Application settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing toggles, persisted as one JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Haptic feedback on a successful scan
    pub vibrate: bool,
    /// Audible feedback on a successful scan
    pub beep: bool,
    /// Open URL payloads right after scanning
    pub auto_open_url: bool,
    /// Request an AI summary for each result
    pub ai_analysis: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            vibrate: true,
            beep: true,
            auto_open_url: false,
            ai_analysis: true,
        }
    }
}

/// Names one flag of [`AppSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Vibrate,
    Beep,
    AutoOpenUrl,
    AiAnalysis,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Vibrate,
        SettingKey::Beep,
        SettingKey::AutoOpenUrl,
        SettingKey::AiAnalysis,
    ];

    /// Kebab-case name used on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::Vibrate => "vibrate",
            SettingKey::Beep => "beep",
            SettingKey::AutoOpenUrl => "auto-open-url",
            SettingKey::AiAnalysis => "ai-analysis",
        }
    }

    /// Human label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SettingKey::Vibrate => "Vibrate on success",
            SettingKey::Beep => "Beep on success",
            SettingKey::AutoOpenUrl => "Open URLs automatically",
            SettingKey::AiAnalysis => "AI analysis",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vibrate" => Ok(SettingKey::Vibrate),
            "beep" => Ok(SettingKey::Beep),
            "auto-open-url" | "autoOpenUrl" | "auto_open_url" => Ok(SettingKey::AutoOpenUrl),
            "ai-analysis" | "aiAnalysis" | "ai_analysis" => Ok(SettingKey::AiAnalysis),
            _ => Err(format!(
                "Unknown setting: {s} (expected one of: vibrate, beep, auto-open-url, ai-analysis)"
            )),
        }
    }
}

impl AppSettings {
    /// Read one flag
    #[must_use]
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Vibrate => self.vibrate,
            SettingKey::Beep => self.beep,
            SettingKey::AutoOpenUrl => self.auto_open_url,
            SettingKey::AiAnalysis => self.ai_analysis,
        }
    }

    /// Set one flag
    pub fn set(&mut self, key: SettingKey, value: bool) {
        match key {
            SettingKey::Vibrate => self.vibrate = value,
            SettingKey::Beep => self.beep = value,
            SettingKey::AutoOpenUrl => self.auto_open_url = value,
            SettingKey::AiAnalysis => self.ai_analysis = value,
        }
    }

    /// Flip one flag and return its new value
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }
}
