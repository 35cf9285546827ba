use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    /// 網路、DNS、TLS 或逾時
    #[error("Error: {message}")]
    TransportError { message: String },

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// 伺服器回應格式正確但表示失敗 (例如登入被拒)
    #[error("{message}")]
    ApplicationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl StorefrontError {
    pub fn application(message: impl Into<String>) -> Self {
        Self::ApplicationError {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "timed out".to_string()
        } else {
            e.to_string()
        };
        Self::TransportError { message }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
