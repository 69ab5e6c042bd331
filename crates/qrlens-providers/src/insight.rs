//! AI insight (Gemini `generateContent`)

use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const SERVICE: &str = "Gemini";

/// Text shown when no insight could be produced
pub const INSIGHT_FALLBACK: &str = "Analysis unavailable at this moment.";

const SYSTEM_INSTRUCTION: &str = "You are a security-focused AI assistant that helps users \
understand QR code content safely and quickly.";

const MAX_OUTPUT_TOKENS: u32 = 200;

/// Produces a short natural-language summary of scanned content
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn analyze(&self, content: &str) -> ProviderResult<String>;
}

/// Google Gemini REST client
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prompt sent for a scanned payload
pub fn build_prompt(content: &str) -> String {
    format!(
        "Analyze the following content extracted from a QR code and provide a brief summary \
         of what it is and any potential security risks if it's a URL. Content: \"{content}\""
    )
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    async fn analyze(&self, content: &str) -> ProviderResult<String> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let prompt = build_prompt(content);
        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        tracing::debug!("POST {} (model {})", self.endpoint(), self.model);
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());
            return Err(ProviderError::Status {
                service: SERVICE,
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse(SERVICE));
        }
        Ok(text.to_string())
    }
}

/// Best-effort insight: any failure is logged and replaced by
/// [`INSIGHT_FALLBACK`]
pub async fn analyze_or_fallback(provider: &dyn InsightProvider, content: &str) -> String {
    match provider.analyze(content).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("AI analysis failed: {e}");
            INSIGHT_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_content() {
        let prompt = build_prompt("https://example.com");
        assert!(prompt.starts_with("Analyze the following content extracted from a QR code"));
        assert!(prompt.ends_with("Content: \"https://example.com\""));
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part { text: "sys" }],
            },
            contents: vec![Content {
                parts: vec![Part { text: "user" }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 200);
    }
}
