use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use film_stats_server::catalog::load_dataset;
use film_stats_server::config;
use film_stats_server::server::{metrics, run_server, RequestsLoggingLevel};
use film_stats_server::stats::{unique_count, FilmField};
use film_stats_server::trigger::{HookDispatcher, UpdateDispatcher};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the films_stats.json dataset. Can also be specified in config file.
    #[clap(value_parser = parse_path)]
    pub dataset: Option<PathBuf>,

    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3002)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9092)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of content in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// URL of the automation hook that accepted films are forwarded to.
    #[clap(long)]
    pub hook_url: Option<String>,

    /// Bearer token for the automation hook.
    #[clap(long, env = "FILM_HOOK_TOKEN", hide_env_values = true)]
    pub hook_token: Option<String>,

    /// Only load and check the dataset, then exit.
    #[clap(long)]
    pub check_only: bool,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            dataset_path: args.dataset.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            hook_url: args.hook_url.clone(),
            hook_token: args.hook_token.clone(),
        }
    }
}

fn make_dispatcher(
    trigger: Option<&config::TriggerSettings>,
) -> Result<Option<Arc<dyn UpdateDispatcher>>> {
    let Some(trigger) = trigger else {
        warn!("No update hook configured, trigger calls will be rejected.");
        return Ok(None);
    };
    let dispatcher = HookDispatcher::new(
        trigger.hook_url.clone(),
        trigger.hook_token.clone(),
        trigger.event_type.clone(),
        trigger.timeout_sec,
    )?;
    info!(
        "Forwarding trigger calls to {} as {}",
        dispatcher.hook_url(),
        trigger.event_type
    );
    Ok(Some(Arc::new(dispatcher)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  dataset_path: {:?}", app_config.dataset_path);
    info!("  port: {}", app_config.port);
    info!("  watching_since: {}", app_config.dashboard.watching_since);

    let dataset = load_dataset(&app_config.dataset_path)?;
    if cli_args.check_only {
        return Ok(());
    }

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_dataset_metrics(
        dataset.films_count(),
        unique_count(dataset.films(), &FilmField::Director),
        unique_count(dataset.films(), &FilmField::Countries),
    );

    let dispatcher = make_dispatcher(app_config.trigger.as_ref())?;

    tokio::select! {
        result = run_server(
            app_config.server_config(),
            Arc::new(dataset),
            dispatcher,
            app_config.dashboard.clone(),
        ) => {
            info!("HTTP server stopped: {:?}", result);
            result
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal, stopping...");
            Ok(())
        }
    }
}
