// Shared HTTP plumbing for the upstream providers
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// GET `url` and decode the JSON body. Non-2xx statuses are errors.
///
/// `provider` names the upstream in error messages; the URL is left out
/// because it carries the API key.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    provider: &str,
    url: &str,
) -> Result<T> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(reqwest::Error::without_url)
        .with_context(|| format!("Failed to send request to {}", provider))?;

    if !response.status().is_success() {
        anyhow::bail!("{} responded with status {}", provider, response.status());
    }

    response
        .json::<T>()
        .await
        .map_err(reqwest::Error::without_url)
        .with_context(|| format!("Failed to parse {} response", provider))
}
