use crate::stats::DashboardLimits;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub dataset_path: Option<String>,
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,
    pub content_cache_age_sec: Option<usize>,
    pub frontend_dir_path: Option<String>,
    /// YYYY-MM-DD
    pub watching_since: Option<String>,

    pub trigger: Option<TriggerConfig>,
    /// Missing keys keep their default limit.
    pub dashboard: Option<DashboardLimits>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct TriggerConfig {
    pub hook_url: Option<String>,
    pub hook_token: Option<String>,
    pub event_type: Option<String>,
    pub timeout_sec: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
