use async_trait::async_trait;
use reqwest::{Client, Url};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::IndexProvider;
use crate::errors::CoreError;
use crate::models::index::{IndexAllocation, IndexSummary};
use crate::models::settings::Settings;

/// HTTP implementation of [`IndexProvider`].
///
/// Talks to the allocation server defined by [`Settings::api_base_url`]:
/// - `GET {base}/api/indices` — available indices
/// - `GET {base}/api/indices/{name}?amount={amount}` — computed allocation
///
/// Both are idempotent, unauthenticated reads. Any non-2xx status is an
/// opaque failure; no retry or backoff.
pub struct HttpIndexProvider {
    client: Client,
    base_url: String,
}

impl HttpIndexProvider {
    pub fn new(settings: Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.api_base_url,
        }
    }

    /// Construct from the `DIY_INDEX_API_BASE_URL` environment variable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CoreError> {
        Ok(Self::new(Settings::from_env()?))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_url(&self) -> Result<Url, CoreError> {
        Url::parse(&format!("{}/api/indices", self.base_url))
            .map_err(|e| CoreError::Validation(format!("invalid API base URL: {e}")))
    }

    /// Build the allocation URL with the index name percent-encoded as a
    /// path segment.
    fn allocation_url(&self, index_name: &str, amount: f64) -> Result<Url, CoreError> {
        let mut url = self.listing_url()?;
        url.path_segments_mut()
            .map_err(|_| CoreError::Validation("API base URL cannot have paths appended".into()))?
            .push(index_name);
        url.query_pairs_mut()
            .append_pair("amount", &amount.to_string());
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl IndexProvider for HttpIndexProvider {
    fn name(&self) -> &str {
        "IndexApi"
    }

    async fn list_indices(&self) -> Result<Vec<IndexSummary>, CoreError> {
        let url = self.listing_url()?;
        let endpoint = url.path().to_string();

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Server {
                status: status.as_u16(),
                endpoint,
            });
        }

        let indices: Vec<IndexSummary> = resp.json().await.map_err(|e| {
            CoreError::InvalidResponse(format!("failed to parse index listing: {e}"))
        })?;
        for index in &indices {
            index.validate()?;
        }
        Ok(indices)
    }

    async fn get_allocation(
        &self,
        index_name: &str,
        amount: f64,
    ) -> Result<IndexAllocation, CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "investment amount must be finite and non-negative, got {amount}"
            )));
        }

        let url = self.allocation_url(index_name, amount)?;
        let endpoint = url.path().to_string();

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Server {
                status: status.as_u16(),
                endpoint,
            });
        }

        let allocation: IndexAllocation = resp.json().await.map_err(|e| {
            CoreError::InvalidResponse(format!(
                "failed to parse allocation for {index_name}: {e}"
            ))
        })?;
        allocation.validate()?;
        Ok(allocation)
    }
}
