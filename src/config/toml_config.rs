use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://istockhomes.com/App/api";
pub const DEFAULT_SITE_BASE_URL: &str = "https://istockhomes.com/App/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub api: ApiConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SITE_BASE_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${STOREFRONT_API})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StorefrontError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for StorefrontConfig {
    fn api_base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    fn site_base_url(&self) -> &str {
        &self.site.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        validation::validate_base_url("site.base_url", &self.site.base_url)?;
        validation::validate_range("api.timeout_seconds", self.api.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_point_at_production() {
        let config = StorefrontConfig::default();
        assert_eq!(
            config.listings_endpoint(),
            "https://istockhomes.com/App/api/AllListings.php"
        );
        assert_eq!(config.login_endpoint(), "https://istockhomes.com/App/api/login.php");
        assert_eq!(
            config.submit_listing_endpoint(),
            "https://istockhomes.com/App/api/submit-listing.php"
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[api]
base_url = "http://127.0.0.1:8080/api/"
"#;

        let config = StorefrontConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_base_url(), "http://127.0.0.1:8080/api");
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.site_base_url(), DEFAULT_SITE_BASE_URL);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STOREFRONT_TEST_SITE", "https://cdn.example.com/App/");

        let toml_content = r#"
[site]
base_url = "${STOREFRONT_TEST_SITE}"
"#;

        let config = StorefrontConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.base_url, "https://cdn.example.com/App/");

        std::env::remove_var("STOREFRONT_TEST_SITE");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
base_url = "invalid-url"
timeout_seconds = 0
"#;

        let config = StorefrontConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = StorefrontConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
base_url = "https://api.example.com/App/api"
timeout_seconds = 5
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = StorefrontConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
