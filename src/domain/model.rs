use crate::utils::error::{Result, StorefrontError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One catalog entry as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_path: Option<String>,
}

/// Envelope returned by the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub listings: Vec<Listing>,
}

/// 缺少 `listings` 與 `"listings": null` 一樣視為空清單
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Listing>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Listing>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingsResult {
    Success(Vec<Listing>),
    Failure(String),
}

impl From<Result<Vec<Listing>>> for ListingsResult {
    fn from(result: Result<Vec<Listing>>) -> Self {
        match result {
            Ok(listings) => Self::Success(listings),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Business,
    Marine,
    Aircraft,
    Housing,
    Art,
    Domains,
    Automotive,
}

impl Category {
    /// 畫面上分類列的順序
    pub const ALL: [Category; 8] = [
        Category::All,
        Category::Business,
        Category::Marine,
        Category::Aircraft,
        Category::Housing,
        Category::Art,
        Category::Domains,
        Category::Automotive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Business => "Business",
            Category::Marine => "Marine",
            Category::Aircraft => "Aircraft",
            Category::Housing => "Housing",
            Category::Art => "Art",
            Category::Domains => "Domains",
            Category::Automotive => "Automotive",
        }
    }

    /// Exact, case-sensitive match against a listing's category. `All`
    /// matches everything, including listings without a category.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Category::All => true,
            other => category == Some(other.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StorefrontError::ValidationError {
                message: format!("Unknown category: {}", s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing_with_nulls() {
        let body = r#"{"success":true,"listings":[{"id":1,"title":"Boat","price":"$500","category":"Marine","description":null,"image_path":null}]}"#;
        let response: ListingsResponse = serde_json::from_str(body).unwrap();

        assert!(response.success);
        assert_eq!(response.listings.len(), 1);
        assert_eq!(response.listings[0].title, "Boat");
        assert_eq!(response.listings[0].category.as_deref(), Some("Marine"));
        assert!(response.listings[0].image_path.is_none());
    }

    #[test]
    fn test_missing_listings_defaults_to_empty() {
        let response: ListingsResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert!(response.listings.is_empty());
    }

    #[test]
    fn test_null_listings_defaults_to_empty() {
        let response: ListingsResponse =
            serde_json::from_str(r#"{"success":true,"listings":null}"#).unwrap();
        assert!(response.success);
        assert!(response.listings.is_empty());
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert_eq!("Marine".parse::<Category>().unwrap(), Category::Marine);
        assert!("marine".parse::<Category>().is_err());
        assert!("Boats".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_matches() {
        assert!(Category::All.matches(None));
        assert!(Category::Art.matches(Some("Art")));
        assert!(!Category::Art.matches(Some("art")));
        assert!(!Category::Art.matches(None));
    }

    #[test]
    fn test_result_from_error_keeps_message() {
        let err = StorefrontError::TransportError {
            message: "timed out".to_string(),
        };
        assert_eq!(
            ListingsResult::from(Err::<Vec<Listing>, _>(err)),
            ListingsResult::Failure("Error: timed out".to_string())
        );
    }
}
