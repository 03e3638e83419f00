use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use film_stats_server::trigger::{FilmEntry, SubmissionQueue, TriggerClient};

/// Queue films for update on a film stats server.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the server, e.g. http://localhost:3002
    pub server_url: String,

    /// Films as slug[:rating_i[:rating_v]], missing ratings count as 0.
    #[clap(required = true, value_parser = parse_entry)]
    pub films: Vec<FilmEntry>,

    /// How many times to resend films that failed.
    #[clap(long, default_value_t = 1)]
    pub retries: usize,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = 30)]
    pub timeout_sec: u64,
}

fn parse_rating(s: Option<&str>) -> Result<f64, String> {
    match s {
        None | Some("") => Ok(0.0),
        Some(s) => s
            .parse::<f64>()
            .map_err(|_| format!("Invalid rating '{}'", s)),
    }
}

fn parse_entry(s: &str) -> Result<FilmEntry, String> {
    let mut parts = s.splitn(3, ':');
    let slug = parts.next().unwrap_or_default().trim();
    let rating_i = parse_rating(parts.next())?;
    let rating_v = parse_rating(parts.next())?;
    Ok(FilmEntry::new(slug, rating_i, rating_v))
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

    let client = TriggerClient::new(cli_args.server_url.clone(), cli_args.timeout_sec)?;
    info!("Submitting to {}", client.trigger_url());

    let mut queue = SubmissionQueue::new(client);
    for film in &cli_args.films {
        if let Err(err) = queue.stage(&film.slug, film.rating_i, film.rating_v) {
            bail!("{}", err);
        }
    }

    if let Err(err) = queue.submit_all().await {
        warn!("Batch submission failed: {:#}", err);
    }

    for attempt in 1..=cli_args.retries {
        if queue.failed().is_empty() {
            break;
        }
        info!(
            "Retry {}/{} for {} films",
            attempt,
            cli_args.retries,
            queue.failed().len()
        );
        let report = queue.retry_failed().await;
        for slug in &report.succeeded {
            info!("Queued {}", slug);
        }
    }

    if !queue.failed().is_empty() {
        let slugs: Vec<&str> = queue.failed().iter().map(|f| f.slug.as_str()).collect();
        bail!("Could not submit {} films: {}", slugs.len(), slugs.join(", "));
    }
    info!("All {} films submitted", cli_args.films.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries() {
        assert_eq!(
            parse_entry("flow-2024:4.5:5").unwrap(),
            FilmEntry::new("flow-2024", 4.5, 5.0)
        );
        assert_eq!(parse_entry("flow").unwrap(), FilmEntry::new("flow", 0.0, 0.0));
        assert_eq!(parse_entry("flow:3").unwrap(), FilmEntry::new("flow", 3.0, 0.0));
        assert!(parse_entry("flow:great").is_err());
    }
}
