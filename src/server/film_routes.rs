use super::state::{GuardedDataset, ServerState};
use crate::catalog::Film;
use crate::stats::all_films_newest_first;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Films per page of the "all films" grid.
pub const FILMS_PAGE_SIZE: usize = 12;

#[derive(Deserialize, Debug, Default)]
pub struct PageQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct FilmsPage<'a> {
    total: usize,
    offset: usize,
    films: Vec<&'a Film>,
}

async fn get_info(State(dataset): State<GuardedDataset>) -> Response {
    match dataset.general_info() {
        Some(info) => Json(info).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_films(State(dataset): State<GuardedDataset>, Query(page): Query<PageQuery>) -> Response {
    let offset = page.offset.unwrap_or(0);
    let limit = page.limit.unwrap_or(FILMS_PAGE_SIZE);
    let films = all_films_newest_first(dataset.films())
        .into_iter()
        .skip(offset)
        .take(limit)
        .collect();
    Json(FilmsPage {
        total: dataset.films_count(),
        offset,
        films,
    })
    .into_response()
}

async fn get_film(State(dataset): State<GuardedDataset>, Path(id): Path<u64>) -> Response {
    match dataset.get_film(id) {
        Some(film) => Json(film).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn make_film_routes(state: ServerState) -> Router {
    Router::new()
        .route("/info", get(get_info))
        .route("/films", get(get_films))
        .route("/films/{id}", get(get_film))
        .with_state(state)
}
