use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;

/// Every backend call goes through a client bounded by the configured timeout.
pub fn build_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .build()?;
    Ok(client)
}
