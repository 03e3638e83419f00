//! HTTP client for end-to-end tests
//!
//! This module wraps reqwest with one method per film stats server endpoint.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    pub async fn get_home(&self) -> Response {
        self.get("/").await
    }

    // ========================================================================
    // Film Endpoints
    // ========================================================================

    pub async fn get_info(&self) -> Response {
        self.get("/v1/info").await
    }

    pub async fn get_films(&self, offset: Option<usize>, limit: Option<usize>) -> Response {
        let mut query = vec![];
        if let Some(offset) = offset {
            query.push(format!("offset={}", offset));
        }
        if let Some(limit) = limit {
            query.push(format!("limit={}", limit));
        }
        self.get(&format!("/v1/films?{}", query.join("&"))).await
    }

    pub async fn get_film(&self, id: &str) -> Response {
        self.get(&format!("/v1/films/{}", id)).await
    }

    // ========================================================================
    // Stats Endpoints
    // ========================================================================

    pub async fn get_stats(&self, view: &str) -> Response {
        self.get(&format!("/v1/stats/{}", view)).await
    }

    pub async fn get_frequency(&self, field: &str, limit: Option<usize>) -> Response {
        match limit {
            Some(limit) => {
                self.get(&format!("/v1/stats/frequency/{}?limit={}", field, limit))
                    .await
            }
            None => self.get(&format!("/v1/stats/frequency/{}", field)).await,
        }
    }

    pub async fn get_rated(&self, field: &str) -> Response {
        self.get(&format!("/v1/stats/rated/{}", field)).await
    }

    pub async fn get_country_films(&self, map_name: &str) -> Response {
        let mut url = reqwest::Url::parse(&self.base_url).expect("Invalid base url");
        url.path_segments_mut()
            .expect("Base url cannot be a base")
            .pop_if_empty()
            .extend(["v1", "stats", "countries", map_name, "films"]);
        self.client.get(url).send().await.expect("Request failed")
    }

    // ========================================================================
    // Trigger Endpoint
    // ========================================================================

    pub async fn post_trigger(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/trigger", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn post_trigger_raw(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/v1/trigger", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("Request failed")
    }
}
