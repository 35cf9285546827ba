pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command};

pub use crate::config::StorefrontConfig;
pub use crate::core::{
    catalog::CatalogFetcher,
    controller::CatalogController,
    session::{AuthClient, AuthSession},
    submission::{ListingForm, SubmissionClient, SubmissionOutcome},
    view_state::{CatalogDisplay, CatalogViewState},
};
pub use crate::domain::model::{Category, Listing, ListingsResult};
pub use crate::utils::error::{Result, StorefrontError};
