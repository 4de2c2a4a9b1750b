use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::errors::fetch_context;

/// HTTP client that attaches a bearer token to every request
pub struct AuthorizedClient {
    client: Client,
    token: Option<String>,
}

impl AuthorizedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, token: Option<String>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client, token })
    }

    /// Single GET attempt; non-success statuses are reported as errors
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response)?;

        response
            .text()
            .await
            .with_context(|| fetch_context(url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .with_context(|| fetch_context(url))
    }

    fn check_response_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("API returned status: {} for {}", status, response.url());
        }
        Ok(())
    }
}
