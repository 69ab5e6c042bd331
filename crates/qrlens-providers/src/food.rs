//! Product lookup (`OpenFoodFacts`)

use crate::config::ProviderConfig;
use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use qrlens_core::FoodProduct;
use serde::Deserialize;

const SERVICE: &str = "OpenFoodFacts";

/// Looks up product data for a barcode
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Find the product for a barcode, `None` if the database has no entry
    async fn lookup(&self, barcode: &str) -> ProviderResult<Option<FoodProduct>>;
}

/// `OpenFoodFacts` v2 API client
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    #[serde(default)]
    product: Option<FoodProduct>,
}

impl OpenFoodFactsClient {
    /// Create a client for a base URL (no trailing path)
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: impl Into<String>, config: &ProviderConfig) -> ProviderResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        Self::new(config.off_base_url.clone(), config)
    }

    fn product_url(&self, barcode: &str) -> String {
        format!("{}/api/v2/product/{barcode}.json", self.base_url)
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &str) -> ProviderResult<Option<FoodProduct>> {
        if barcode.is_empty() || !barcode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProviderError::InvalidInput(format!(
                "barcode must be digits only: {barcode:?}"
            )));
        }

        let url = self.product_url(barcode);
        tracing::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let status = response.status();

        // Unknown products come back as 404 with a JSON body
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::Status {
                service: SERVICE,
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("error").to_string(),
            });
        }

        let body: ProductResponse = response.json().await?;
        if body.status != 1 {
            tracing::debug!("No product for {barcode}");
            return Ok(None);
        }

        Ok(body.product.map(|mut product| {
            if product.code.is_empty() {
                product.code = barcode.to_string();
            }
            product
        }))
    }
}

/// Best-effort lookup: failures are logged and treated as "no product"
pub async fn lookup_or_none(provider: &dyn ProductLookup, barcode: &str) -> Option<FoodProduct> {
    match provider.lookup(barcode).await {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!("Product lookup failed for {barcode}: {e}");
            None
        }
    }
}
