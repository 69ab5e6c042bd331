//! Provider error types

use thiserror::Error;

/// Result type for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from external services
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure or undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the service
    #[error("{service} returned HTTP {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No API key configured for a service that needs one
    #[error("No API key configured (set QRLENS_GEMINI_API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    /// The service answered but without usable content
    #[error("{0} returned an empty response")]
    EmptyResponse(&'static str),
}
