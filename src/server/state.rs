use axum::extract::FromRef;

use crate::catalog::FilmDataset;
use crate::stats::DashboardSettings;
use crate::trigger::UpdateDispatcher;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedDataset = Arc<FilmDataset>;
pub type OptionalDispatcher = Option<Arc<dyn UpdateDispatcher>>;
pub type GuardedDashboardSettings = Arc<DashboardSettings>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub dataset: GuardedDataset,
    pub dispatcher: OptionalDispatcher,
    pub dashboard: GuardedDashboardSettings,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        dataset: GuardedDataset,
        dispatcher: OptionalDispatcher,
        dashboard: DashboardSettings,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            dataset,
            dispatcher,
            dashboard: Arc::new(dashboard),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedDataset {
    fn from_ref(input: &ServerState) -> Self {
        input.dataset.clone()
    }
}

impl FromRef<ServerState> for OptionalDispatcher {
    fn from_ref(input: &ServerState) -> Self {
        input.dispatcher.clone()
    }
}

impl FromRef<ServerState> for GuardedDashboardSettings {
    fn from_ref(input: &ServerState) -> Self {
        input.dashboard.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
