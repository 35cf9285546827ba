use crate::domain::model::{Category, Listing, ListingsResult};
use crate::utils::error::Result;

pub const LOADING_MESSAGE: &str = "Loading Listings...";
pub const EMPTY_MESSAGE: &str = "No listings match this category.";

/// What the catalog screen shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogDisplay<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Listings(Vec<&'a Listing>),
}

/// State behind the catalog screen. Owned by a single context; the fetch
/// result is handed to it rather than written from the network task.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewState {
    listings: Vec<Listing>,
    is_loading: bool,
    error_message: Option<String>,
    selected_category: Category,
}

impl Default for CatalogViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogViewState {
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
            is_loading: true,
            error_message: None,
            selected_category: Category::All,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Applies a fetch outcome. A failure keeps whatever was loaded before.
    pub fn apply_result(&mut self, result: ListingsResult) {
        self.is_loading = false;
        match result {
            ListingsResult::Success(listings) => {
                tracing::debug!("Applying {} listings", listings.len());
                self.error_message = None;
                self.listings = listings;
            }
            ListingsResult::Failure(message) => {
                tracing::debug!("Applying failure, keeping {} listings", self.listings.len());
                self.error_message = Some(message);
            }
        }
    }

    pub fn select(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Selects a category by its exact name. Unknown names leave the
    /// selection untouched.
    pub fn set_category(&mut self, name: &str) -> Result<()> {
        self.selected_category = name.parse()?;
        Ok(())
    }

    pub fn filtered_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| self.selected_category.matches(listing.category.as_deref()))
            .collect()
    }

    pub fn display(&self) -> CatalogDisplay<'_> {
        if self.is_loading {
            return CatalogDisplay::Loading;
        }
        if let Some(message) = &self.error_message {
            return CatalogDisplay::Error(message);
        }
        let filtered = self.filtered_listings();
        if filtered.is_empty() {
            CatalogDisplay::Empty
        } else {
            CatalogDisplay::Listings(filtered)
        }
    }
}
