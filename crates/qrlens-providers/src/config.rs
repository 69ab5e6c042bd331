//! Provider configuration from the environment

use std::time::Duration;

pub const DEFAULT_OFF_BASE_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and credentials for external services
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub off_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub gemini_api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            off_base_url: DEFAULT_OFF_BASE_URL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProviderConfig {
    /// Read configuration from process environment variables
    ///
    /// - `QRLENS_OFF_BASE_URL`, `QRLENS_GEMINI_BASE_URL`, `QRLENS_GEMINI_MODEL`
    /// - API key: `QRLENS_GEMINI_API_KEY`, then `GEMINI_API_KEY`, then `API_KEY`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            off_base_url: non_empty("QRLENS_OFF_BASE_URL").unwrap_or(defaults.off_base_url),
            gemini_base_url: non_empty("QRLENS_GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url),
            gemini_model: non_empty("QRLENS_GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_api_key: non_empty("QRLENS_GEMINI_API_KEY")
                .or_else(|| non_empty("GEMINI_API_KEY"))
                .or_else(|| non_empty("API_KEY")),
            timeout: defaults.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_env() {
        let config = ProviderConfig::from_lookup(|_| None);
        assert_eq!(config.off_base_url, DEFAULT_OFF_BASE_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_api_key_precedence() {
        let env: HashMap<&str, &str> = [("GEMINI_API_KEY", "second"), ("API_KEY", "third")]
            .into_iter()
            .collect();
        let config = ProviderConfig::from_lookup(|k| env.get(k).map(ToString::to_string));
        assert_eq!(config.gemini_api_key.as_deref(), Some("second"));

        let env: HashMap<&str, &str> = [("QRLENS_GEMINI_API_KEY", "first"), ("API_KEY", "third")]
            .into_iter()
            .collect();
        let config = ProviderConfig::from_lookup(|k| env.get(k).map(ToString::to_string));
        assert_eq!(config.gemini_api_key.as_deref(), Some("first"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ProviderConfig::from_lookup(|k| {
            (k == "QRLENS_OFF_BASE_URL" || k == "API_KEY").then(|| "  ".to_string())
        });
        assert_eq!(config.off_base_url, DEFAULT_OFF_BASE_URL);
        assert!(config.gemini_api_key.is_none());
    }
}
