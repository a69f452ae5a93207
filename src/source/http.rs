use super::Fetcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("HTTP {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}
