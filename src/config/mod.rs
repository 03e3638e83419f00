mod file_config;

pub use file_config::{FileConfig, TriggerConfig};

use crate::server::{RequestsLoggingLevel, ServerConfig};
use crate::stats::{DashboardLimits, DashboardSettings, DEFAULT_WATCHING_SINCE};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_EVENT_TYPE: &str = "film-update";
pub const DEFAULT_HOOK_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub hook_url: Option<String>,
    pub hook_token: Option<String>,
}

/// Where accepted trigger calls are forwarded. Present only when both the
/// hook url and its token are known.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerSettings {
    pub hook_url: String,
    pub hook_token: String,
    pub event_type: String,
    pub timeout_sec: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,

    pub trigger: Option<TriggerSettings>,
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "dataset_path must be specified as the DATASET argument or in config file"
                )
            })?;

        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }
        if !dataset_path.is_file() {
            bail!("dataset_path is not a file: {:?}", dataset_path);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let watching_since = parse_watching_since(
            file.watching_since
                .as_deref()
                .unwrap_or(DEFAULT_WATCHING_SINCE),
        )?;

        let limits = file.dashboard.unwrap_or_default();
        validate_limits(&limits)?;

        let trigger_file = file.trigger.unwrap_or_default();
        let hook_url = trigger_file.hook_url.or_else(|| cli.hook_url.clone());
        let hook_token = trigger_file.hook_token.or_else(|| cli.hook_token.clone());
        let trigger = match (hook_url, hook_token) {
            (Some(hook_url), Some(hook_token))
                if !hook_url.trim().is_empty() && !hook_token.trim().is_empty() =>
            {
                Some(TriggerSettings {
                    hook_url,
                    hook_token,
                    event_type: trigger_file
                        .event_type
                        .unwrap_or_else(|| DEFAULT_EVENT_TYPE.to_string()),
                    timeout_sec: trigger_file.timeout_sec.unwrap_or(DEFAULT_HOOK_TIMEOUT_SEC),
                })
            }
            _ => None,
        };

        Ok(Self {
            dataset_path,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            trigger,
            dashboard: DashboardSettings {
                limits,
                watching_since,
            },
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            content_cache_age_sec: self.content_cache_age_sec,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_watching_since(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("watching_since must be a YYYY-MM-DD date, got {:?}", s))
}

fn validate_limits(limits: &DashboardLimits) -> Result<()> {
    let named = [
        ("genres", limits.genres),
        ("rated_genres", limits.rated_genres),
        ("themes", limits.themes),
        ("nanogenres", limits.nanogenres),
        ("countries", limits.countries),
        ("directors", limits.directors),
        ("actors", limits.actors),
        ("languages", limits.languages),
        ("highest_rated", limits.highest_rated),
        ("recent", limits.recent),
        ("keywords", limits.keywords),
        ("min_rated_samples", limits.min_rated_samples),
    ];
    for (name, value) in named {
        if value == 0 {
            bail!("dashboard.{} must be positive", name);
        }
    }
    Ok(())
}
