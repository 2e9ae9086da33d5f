//! HTTP client for the Data Dragon CDN.
//!
//! `CatalogSource` is the seam the catalog fetches through; `DataDragonClient`
//! is the reqwest implementation used in production.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::models::ChampionListResponse;

use super::LoadError;

/// Anything that can produce a champion list for a URL.
pub trait CatalogSource: Send + Sync + 'static {
    fn fetch_champions(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<ChampionListResponse, LoadError>> + Send;
}

/// Data Dragon client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct DataDragonClient {
    client: Client,
}

impl DataDragonClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, LoadError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(LoadError::from_status(status, &body))
        }
    }
}

impl CatalogSource for DataDragonClient {
    async fn fetch_champions(&self, url: &str) -> Result<ChampionListResponse, LoadError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;

        let text = response.text().await?;
        debug!(url = url, bytes = text.len(), "Champion list response received");

        ChampionListResponse::from_json(&text)
    }
}
