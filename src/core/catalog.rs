use crate::adapters::http::build_client;
use crate::domain::model::{Listing, ListingsResponse, ListingsResult};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::Client;

pub const SERVER_REPORTED_FAILURE: &str = "Error: server reported failure";

/// Pulls the whole catalog in one GET. No retries.
pub struct CatalogFetcher {
    client: Client,
    endpoint: String,
}

impl CatalogFetcher {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config.listings_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn try_fetch(&self) -> Result<Vec<Listing>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("API response status: {}", response.status());

        // 狀態碼不決定結果，由 body 決定
        let body = response.bytes().await?;
        let parsed: ListingsResponse = serde_json::from_slice(&body)?;

        if !parsed.success {
            tracing::warn!(
                "Catalog endpoint reported failure ({} listings attached)",
                parsed.listings.len()
            );
            return Err(StorefrontError::application(SERVER_REPORTED_FAILURE));
        }

        Ok(parsed.listings)
    }
}

#[async_trait]
impl CatalogSource for CatalogFetcher {
    async fn fetch(&self) -> ListingsResult {
        let result = self.try_fetch().await;
        match &result {
            Ok(listings) => tracing::info!("📦 Fetched {} listings", listings.len()),
            Err(e) => tracing::warn!("❌ Catalog fetch failed: {}", e),
        }
        result.into()
    }
}
