use crate::adapters::http::build_client;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use reqwest::Client;
use serde_json::Value;

pub const UPLOADED_SUCCESSFULLY: &str = "Uploaded successfully";

#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            category: "Art".to_string(),
            description: String::new(),
        }
    }
}

impl Validate for ListingForm {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("title", &self.title)?;
        validate_non_empty_string("price", &self.price)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Uploaded,
    Failed(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> String {
        match self {
            SubmissionOutcome::Uploaded => UPLOADED_SUCCESSFULLY.to_string(),
            SubmissionOutcome::Failed(reason) => format!("Upload failed: {}", reason),
        }
    }
}

impl From<Result<()>> for SubmissionOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Uploaded,
            Err(e) => SubmissionOutcome::Failed(e.to_string()),
        }
    }
}

pub struct SubmissionClient {
    client: Client,
    endpoint: String,
}

impl SubmissionClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config.submit_listing_endpoint(),
        })
    }

    /// Posts the form. A non-2xx status or a JSON body with `success: false`
    /// is a failure; a 2xx body that is not JSON is accepted.
    pub async fn submit(&self, form: &ListingForm) -> Result<()> {
        form.validate()?;

        tracing::debug!("Posting listing {:?} to: {}", form.title, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("title", form.title.as_str()),
                ("price", form.price.as_str()),
                ("category", form.category.as_str()),
                ("description", form.description.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Submission response status: {}", status);
        if !status.is_success() {
            return Err(StorefrontError::application(format!(
                "server returned {}",
                status
            )));
        }

        let body = response.bytes().await?;
        if let Ok(json) = serde_json::from_slice::<Value>(&body) {
            if json.get("success").and_then(Value::as_bool) == Some(false) {
                let reason = json
                    .get("message")
                    .or_else(|| json.get("error"))
                    .and_then(Value::as_str)
                    .unwrap_or("server rejected the listing");
                return Err(StorefrontError::application(reason));
            }
        }

        tracing::info!("✅ Listing {:?} submitted", form.title);
        Ok(())
    }
}
