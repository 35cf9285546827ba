use crate::adapters::http::build_client;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use reqwest::Client;
use serde_json::Value;

pub const LOGIN_FAILED: &str = "Login failed";

/// In-memory session, gone when the process exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSession {
    is_logged_in: bool,
    username: String,
    error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Welcome(String),
    AddListing,
    LogOut,
    SignIn,
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::Welcome(username) => format!("Welcome, {}", username),
            MenuItem::AddListing => "Add a Listing".to_string(),
            MenuItem::LogOut => "Log Out".to_string(),
            MenuItem::SignIn => "Sign In".to_string(),
        }
    }
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn apply_login(&mut self, result: Result<String>) {
        match result {
            Ok(username) => {
                self.username = username;
                self.is_logged_in = true;
                self.error_message = None;
            }
            Err(_) => {
                self.error_message = Some(LOGIN_FAILED.to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.username.clear();
    }

    /// Add-listing is only offered to signed-in users.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        if self.is_logged_in {
            vec![
                MenuItem::Welcome(self.username.clone()),
                MenuItem::AddListing,
                MenuItem::LogOut,
            ]
        } else {
            vec![MenuItem::SignIn]
        }
    }
}

pub struct AuthClient {
    client: Client,
    endpoint: String,
}

impl AuthClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config.login_endpoint(),
        })
    }

    /// Returns the username to show. Any failure collapses to "Login failed";
    /// the server's own detail only reaches the debug log.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        match self.try_login(email, password).await {
            Ok(username) => {
                tracing::info!("✅ Signed in as {}", username);
                Ok(username)
            }
            Err(e) => {
                tracing::debug!("Login rejected: {}", e);
                Err(StorefrontError::application(LOGIN_FAILED))
            }
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<String> {
        tracing::debug!("Posting login to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("email", email), ("password", password)])
            .send()
            .await?;
        tracing::debug!("Login response status: {}", response.status());

        let body = response.bytes().await?;
        let json: Value = serde_json::from_slice(&body)?;

        if json.get("success").and_then(Value::as_bool) != Some(true) {
            return Err(StorefrontError::application(
                json.get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("success flag not set"),
            ));
        }

        Ok(json
            .get("username")
            .and_then(Value::as_str)
            .unwrap_or(email)
            .to_string())
    }
}
