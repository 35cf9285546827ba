use crate::core::image_url::{full_listing_url, resolve_image_url};
use crate::core::price::format_price;
use crate::domain::model::Listing;
use crate::domain::ports::ConfigProvider;
use url::Url;

/// A listing as the catalog list renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<Url>,
    pub detail_url: Option<Url>,
}

impl ListingRow {
    pub fn from_listing<C: ConfigProvider + ?Sized>(listing: &Listing, config: &C) -> Self {
        let site_base = config.site_base_url();
        Self {
            id: listing.id,
            title: listing.title.clone(),
            price: format_price(&listing.price),
            category: listing.category.clone(),
            description: listing.description.clone(),
            image_url: resolve_image_url(listing.image_path.as_deref(), site_base),
            detail_url: full_listing_url(site_base, listing.id),
        }
    }
}

pub fn rows<C: ConfigProvider + ?Sized>(listings: &[&Listing], config: &C) -> Vec<ListingRow> {
    listings
        .iter()
        .map(|listing| ListingRow::from_listing(listing, config))
        .collect()
}
