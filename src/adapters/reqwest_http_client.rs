use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::core::interfaces::adapters::HttpClient;
use crate::global_constants;

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn build(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        log::debug!(
            "[HTTP] Building client: connect_timeout={:?}, read_timeout={:?}",
            connect_timeout,
            read_timeout
        );

        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()
            .context("Unable to build HTTP client")?;

        Ok(Self { client })
    }

    pub fn with_default_timeouts() -> Result<Self> {
        Self::build(
            Duration::from_secs(global_constants::DEFAULT_CONNECT_TIMEOUT_SECONDS),
            Duration::from_secs(global_constants::DEFAULT_READ_TIMEOUT_SECONDS),
        )
    }

    /// Falls back to the default timeouts when the configured ones are rejected.
    /// Only if that also fails does the client run without timeouts.
    pub fn build_or_fallback(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self::build(connect_timeout, read_timeout)
            .or_else(|e| {
                log::error!("[HTTP] Failed to build configured client: {:#}", e);
                Self::with_default_timeouts()
            })
            .unwrap_or_else(|e| {
                log::error!(
                    "[HTTP] Failed to build client with default timeouts: {:#}, using a client without timeouts",
                    e
                );
                Self {
                    client: reqwest::Client::new(),
                }
            })
    }

    async fn send_get(&self, url: &str) -> Result<reqwest::Response> {
        let parsed_url =
            reqwest::Url::parse(url).with_context(|| format!("Problem building the URL: {}", url))?;

        log::debug!("[HTTP] GET {}", parsed_url);

        let response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .context("Problem making HTTP request")?;

        ensure_success_status(response.status())?;
        Ok(response)
    }
}

/// Only 200 counts as success.
pub fn ensure_success_status(status: StatusCode) -> Result<()> {
    if status != StatusCode::OK {
        anyhow::bail!("Error response code: {}", status.as_u16());
    }
    Ok(())
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.send_get(url).await?;
        let body = response
            .text()
            .await
            .context("Problem reading the response body")?;

        log::debug!("[HTTP] Received {} bytes of text", body.len());
        Ok(body)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send_get(url).await?;
        let body = response
            .bytes()
            .await
            .context("Problem reading the response body")?;

        log::debug!("[HTTP] Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}
