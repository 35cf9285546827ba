use crate::domain::model::ListingsResult;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// Base of the PHP API, without trailing slash, e.g. `https://host/App/api`.
    fn api_base_url(&self) -> &str;
    /// Base that relative image paths and detail pages hang off, with trailing slash.
    fn site_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;

    fn listings_endpoint(&self) -> String {
        format!("{}/AllListings.php", self.api_base_url())
    }

    fn login_endpoint(&self) -> String {
        format!("{}/login.php", self.api_base_url())
    }

    fn submit_listing_endpoint(&self) -> String {
        format!("{}/submit-listing.php", self.api_base_url())
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> ListingsResult;
}
