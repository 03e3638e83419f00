//! Aggregated views over the dataset, recomputed on every request.

use super::state::{GuardedDashboardSettings, GuardedDataset, ServerState};
use crate::stats::{
    country_map, decade_distribution, extract_keywords, films_in_map_country, highest_rated,
    most_recent, rank_by_field, rate_categories, year_series, Dashboard, DashboardLimits,
    FilmField, Summary,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RatedQuery {
    pub limit: Option<usize>,
    pub min_samples: Option<usize>,
}

fn parse_field(name: &str) -> Result<FilmField, Response> {
    name.parse::<FilmField>()
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()).into_response())
}

/// Limit used by the dashboard for the same view.
fn default_frequency_limit(field: FilmField, limits: &DashboardLimits) -> usize {
    match field {
        FilmField::Director => limits.directors,
        FilmField::Cast => limits.actors,
        FilmField::Genres | FilmField::PrimaryGenres => limits.genres,
        FilmField::Themes => limits.themes,
        FilmField::Nanogenres => limits.nanogenres,
        FilmField::Countries | FilmField::MapCountries => limits.countries,
        FilmField::OriginalLanguage | FilmField::SpokenLanguages | FilmField::Studios => {
            limits.languages
        }
    }
}

async fn get_dashboard(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
) -> Response {
    Json(Dashboard::build(&dataset, &settings, Utc::now())).into_response()
}

async fn get_summary(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
) -> Response {
    Json(Summary::build(
        dataset.films(),
        settings.watching_since,
        Utc::now(),
    ))
    .into_response()
}

async fn get_frequency(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
    Path(field): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let field = match parse_field(&field) {
        Ok(field) => field,
        Err(response) => return response,
    };
    let limit = query
        .limit
        .unwrap_or_else(|| default_frequency_limit(field, &settings.limits));
    Json(rank_by_field(dataset.films(), &field, limit)).into_response()
}

async fn get_rated(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
    Path(field): Path<String>,
    Query(query): Query<RatedQuery>,
) -> Response {
    let field = match parse_field(&field) {
        Ok(field) => field,
        Err(response) => return response,
    };
    let limits = &settings.limits;
    Json(rate_categories(
        dataset.films(),
        &field,
        query.min_samples.unwrap_or(limits.min_rated_samples),
        query.limit.unwrap_or(limits.rated_genres),
    ))
    .into_response()
}

async fn get_decades(State(dataset): State<GuardedDataset>) -> Response {
    Json(decade_distribution(dataset.films())).into_response()
}

async fn get_years(State(dataset): State<GuardedDataset>) -> Response {
    Json(year_series(dataset.films())).into_response()
}

async fn get_keywords(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(settings.limits.keywords);
    Json(extract_keywords(dataset.films(), limit)).into_response()
}

async fn get_highest_rated(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(settings.limits.highest_rated);
    Json(highest_rated(dataset.films(), limit)).into_response()
}

async fn get_recent(
    State(dataset): State<GuardedDataset>,
    State(settings): State<GuardedDashboardSettings>,
    Query(query): Query<LimitQuery>,
) -> Response {
    let limit = query.limit.unwrap_or(settings.limits.recent);
    Json(most_recent(dataset.films(), limit)).into_response()
}

async fn get_countries(State(dataset): State<GuardedDataset>) -> Response {
    Json(country_map(dataset.films())).into_response()
}

async fn get_country_films(
    State(dataset): State<GuardedDataset>,
    Path(name): Path<String>,
) -> Response {
    Json(films_in_map_country(dataset.films(), &name)).into_response()
}

pub fn make_stats_routes(state: ServerState) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/summary", get(get_summary))
        .route("/frequency/{field}", get(get_frequency))
        .route("/rated/{field}", get(get_rated))
        .route("/decades", get(get_decades))
        .route("/years", get(get_years))
        .route("/keywords", get(get_keywords))
        .route("/highest-rated", get(get_highest_rated))
        .route("/recent", get(get_recent))
        .route("/countries", get(get_countries))
        .route("/countries/{name}/films", get(get_country_films))
        .with_state(state)
}
