//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own dataset file.

use super::constants::*;
use super::fixtures::create_test_dataset;
use async_trait::async_trait;
use film_stats_server::catalog::load_dataset;
use film_stats_server::server::state::OptionalDispatcher;
use film_stats_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use film_stats_server::stats::DashboardSettings;
use film_stats_server::trigger::{PendingFilm, UpdateDispatcher};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Mock update hook for testing - records every dispatched batch
#[derive(Default)]
pub struct MockDispatcher {
    fail: bool,
    batches: Mutex<Vec<Vec<PendingFilm>>>,
}

#[async_trait]
impl UpdateDispatcher for MockDispatcher {
    async fn dispatch(&self, films: &[PendingFilm]) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("hook returned 503 Service Unavailable");
        }
        self.batches.lock().unwrap().push(films.to_vec());
        Ok(())
    }
}

enum Hook {
    Recording,
    Failing,
    Missing,
}

/// Test server instance with an isolated dataset
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The update hook, absent for servers spawned without one
    pub dispatcher: Option<Arc<MockDispatcher>>,

    // Private fields - keep resources alive until drop
    _temp_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with a recording update hook
    ///
    /// # Panics
    ///
    /// Panics if the dataset cannot be created, the port cannot be bound or
    /// the server doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        Self::spawn_with(Hook::Recording).await
    }

    /// Spawns a server whose update hook always fails
    pub async fn spawn_with_failing_hook() -> Self {
        Self::spawn_with(Hook::Failing).await
    }

    /// Spawns a server with no update hook configured
    pub async fn spawn_without_hook() -> Self {
        Self::spawn_with(Hook::Missing).await
    }

    async fn spawn_with(hook: Hook) -> Self {
        let (temp_dir, dataset_path) =
            create_test_dataset().expect("Failed to create test dataset");
        let dataset = load_dataset(&dataset_path).expect("Failed to load test dataset");

        let mock = match hook {
            Hook::Recording => Some(Arc::new(MockDispatcher::default())),
            Hook::Failing => Some(Arc::new(MockDispatcher {
                fail: true,
                ..Default::default()
            })),
            Hook::Missing => None,
        };
        let dispatcher: OptionalDispatcher = mock
            .clone()
            .map(|mock| mock as Arc<dyn UpdateDispatcher>);

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 0, // Disable caching in tests
            ..ServerConfig::default()
        };

        let app = make_app(
            config,
            Arc::new(dataset),
            dispatcher,
            DashboardSettings::default(),
        );

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            dispatcher: mock,
            _temp_dir: temp_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Every batch the update hook received so far
    pub fn dispatched(&self) -> Vec<Vec<PendingFilm>> {
        self.dispatcher
            .as_ref()
            .map(|d| d.batches.lock().unwrap().clone())
            .unwrap_or_default()
    }

    /// Waits for the server to become ready by polling the / endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
