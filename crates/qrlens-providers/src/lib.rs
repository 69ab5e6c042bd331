//! qrlens Providers - external enrichment services
//!
//! Best-effort HTTP clients: product data for barcodes and a short AI
//! summary of any payload. Both sit behind async traits so callers (and
//! tests) can swap implementations.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod food;
pub mod insight;

pub use config::ProviderConfig;
pub use error::{ProviderError, ProviderResult};
pub use food::{lookup_or_none, OpenFoodFactsClient, ProductLookup};
pub use insight::{analyze_or_fallback, GeminiClient, InsightProvider, INSIGHT_FALLBACK};

/// User-Agent sent to external services
pub(crate) const USER_AGENT: &str = concat!(
    "qrlens/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/qrlens/qrlens)"
);
