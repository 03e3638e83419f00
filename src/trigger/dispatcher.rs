//! Forwarding of accepted films to the external automation hook.

use super::models::PendingFilm;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Something that takes accepted films and makes the dataset pipeline pick
/// them up.
#[async_trait]
pub trait UpdateDispatcher: Send + Sync {
    async fn dispatch(&self, films: &[PendingFilm]) -> Result<()>;
}

#[derive(Serialize)]
struct ClientPayload<'a> {
    films: &'a [PendingFilm],
}

#[derive(Serialize)]
struct DispatchBody<'a> {
    event_type: &'a str,
    client_payload: ClientPayload<'a>,
}

/// Posts a repository-dispatch style event to a hook url.
pub struct HookDispatcher {
    client: reqwest::Client,
    hook_url: String,
    token: String,
    event_type: String,
}

impl HookDispatcher {
    pub fn new(
        hook_url: String,
        token: String,
        event_type: String,
        timeout_sec: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .user_agent(concat!("film-stats-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            hook_url,
            token,
            event_type,
        })
    }

    pub fn hook_url(&self) -> &str {
        &self.hook_url
    }
}

#[async_trait]
impl UpdateDispatcher for HookDispatcher {
    async fn dispatch(&self, films: &[PendingFilm]) -> Result<()> {
        let body = DispatchBody {
            event_type: &self.event_type,
            client_payload: ClientPayload { films },
        };
        debug!(
            "Dispatching {} films to {} as {}",
            films.len(),
            self.hook_url,
            self.event_type
        );

        let response = self
            .client
            .post(&self.hook_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("Failed to reach update hook")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("Update hook responded with status {}: {}", status, text);
        }

        info!("Update hook accepted {} films", films.len());
        Ok(())
    }
}
