use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use film_stats_server::catalog::load_dataset;
use film_stats_server::stats::{
    Dashboard, DashboardLimits, DashboardSettings, FrequencyItem, MIN_RATED_SAMPLE_SIZE,
};

/// Print the dashboard aggregations of a dataset.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the films_stats.json dataset.
    #[clap(default_value = "films_stats.json")]
    pub dataset: PathBuf,

    /// Print the full dashboard as JSON instead of a text report.
    #[clap(long)]
    pub json: bool,

    /// Length of every ranking.
    #[clap(long)]
    pub limit: Option<usize>,
}

fn limits_with(limit: Option<usize>) -> DashboardLimits {
    let Some(n) = limit else {
        return DashboardLimits::default();
    };
    DashboardLimits {
        genres: n,
        rated_genres: n,
        themes: n,
        nanogenres: n,
        countries: n,
        directors: n,
        actors: n,
        languages: n,
        highest_rated: n,
        recent: n,
        keywords: n,
        min_rated_samples: MIN_RATED_SAMPLE_SIZE,
    }
}

fn print_ranking(title: &str, items: &[FrequencyItem]) {
    println!("\n{}", title);
    for (index, item) in items.iter().enumerate() {
        println!(
            "  {:>2}. {:<40} {:>4}  ({:.0}%)",
            index + 1,
            item.name,
            item.count,
            item.percentage
        );
    }
}

fn print_report(dashboard: &Dashboard) {
    let summary = &dashboard.summary;
    println!("Films:              {}", summary.films);
    if let Some(info) = dashboard.general_info {
        if info.total_movies != summary.films {
            println!("  (dataset declares {})", info.total_movies);
        }
    }
    println!(
        "Time watched:       {:.1} hours ({:.1} days)",
        summary.total_hours, summary.total_days
    );
    println!("Directors:          {}", summary.unique_directors);
    println!("Countries:          {}", summary.unique_countries);
    println!("Languages:          {}", summary.unique_languages);
    println!(
        "Ratings:            {} total, {} average",
        summary.global_rating_sum, summary.global_average_rating
    );
    println!("Compatibility:      {}%", summary.compatibility);
    println!("Days per film:      {}", summary.days_per_film);

    print_ranking("Genres", &dashboard.genres);
    println!("\nBest rated genres");
    for category in &dashboard.rated_genres {
        println!(
            "  {:<40} {:.2} / {:.2}",
            category.name, category.avg_a, category.avg_b
        );
    }
    print_ranking("Directors", &dashboard.directors);
    print_ranking("Actors", &dashboard.actors);
    print_ranking("Countries", &dashboard.countries);
    print_ranking("Languages", &dashboard.languages);
    print_ranking("Themes", &dashboard.themes);

    println!("\nDecades");
    for bucket in &dashboard.decades {
        println!("  {:<6} {}", bucket.decade, bucket.count);
    }

    println!("\nKeywords");
    let words: Vec<String> = dashboard
        .keywords
        .iter()
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect();
    println!("  {}", words.join(", "));

    println!("\nHighest rated");
    for film in &dashboard.highest_rated {
        println!(
            "  {} ({}) {:.1}",
            film.title,
            film.release_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "?".to_owned()),
            film.viewer_average()
        );
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let dataset = load_dataset(&cli_args.dataset)?;
    let settings = DashboardSettings {
        limits: limits_with(cli_args.limit),
        ..DashboardSettings::default()
    };
    let dashboard = Dashboard::build(&dataset, &settings, Utc::now());

    if cli_args.json {
        let json =
            serde_json::to_string_pretty(&dashboard).context("Failed to serialize dashboard")?;
        println!("{}", json);
    } else {
        print_report(&dashboard);
    }
    Ok(())
}
