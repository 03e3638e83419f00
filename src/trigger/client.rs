//! HTTP client for a film stats server's trigger endpoint.

use super::models::{TriggerRequest, TriggerResponse};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

pub const TRIGGER_PATH: &str = "/v1/trigger";

#[async_trait]
pub trait FilmSubmitter: Send + Sync {
    /// Sends one trigger call. Any non-success answer is an error.
    async fn submit(&self, request: &TriggerRequest) -> Result<TriggerResponse>;
}

pub struct TriggerClient {
    client: reqwest::Client,
    base_url: String,
}

impl TriggerClient {
    /// # Arguments
    /// * `base_url` - Base URL of the server (e.g., "http://localhost:3002")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create HTTP client")?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn trigger_url(&self) -> String {
        format!("{}{}", self.base_url, TRIGGER_PATH)
    }
}

#[async_trait]
impl FilmSubmitter for TriggerClient {
    async fn submit(&self, request: &TriggerRequest) -> Result<TriggerResponse> {
        let response = self
            .client
            .post(self.trigger_url())
            .json(request)
            .send()
            .await
            .context("Failed to connect to film stats server")?;

        let status = response.status();
        let body: Option<TriggerResponse> = response.json().await.ok();
        match body {
            Some(body) if status.is_success() && body.success => Ok(body),
            Some(TriggerResponse {
                error: Some(error), ..
            }) => bail!("Submission failed with status {}: {}", status, error),
            _ => bail!("Submission failed with status {}", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = TriggerClient::new("http://localhost:3002/".to_owned(), 5).unwrap();
        assert_eq!(client.trigger_url(), "http://localhost:3002/v1/trigger");
    }
}
