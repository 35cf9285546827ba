pub mod catalog;
pub mod controller;
pub mod image_url;
pub mod presenter;
pub mod price;
pub mod session;
pub mod submission;
pub mod view_state;

pub use crate::domain::model::{Category, Listing, ListingsResponse, ListingsResult};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
