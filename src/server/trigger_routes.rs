use super::metrics::record_trigger_submission;
use super::state::{OptionalDispatcher, ServerState};
use crate::trigger::{
    normalize_request, parse_request, PendingFilm, TriggerError, TriggerResponse,
};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};

async fn accept_films(
    dispatcher: OptionalDispatcher,
    body: &[u8],
) -> Result<Vec<PendingFilm>, TriggerError> {
    let dispatcher = dispatcher.ok_or(TriggerError::NotConfigured)?;
    let request = parse_request(body)?;
    let films = normalize_request(&request, Utc::now())?;
    dispatcher
        .dispatch(&films)
        .await
        .map_err(|err| TriggerError::Upstream(format!("{:#}", err)))?;
    Ok(films)
}

async fn post_trigger(State(dispatcher): State<OptionalDispatcher>, body: Bytes) -> Response {
    match accept_films(dispatcher, &body).await {
        Ok(films) => {
            info!(
                "Queued {} films for update: {:?}",
                films.len(),
                films.iter().map(|f| f.slug.as_str()).collect::<Vec<_>>()
            );
            record_trigger_submission("accepted", films.len());
            (StatusCode::OK, Json(TriggerResponse::accepted(&films))).into_response()
        }
        Err(err) => {
            warn!("Rejected trigger call: {}", err);
            record_trigger_submission(err.kind(), 0);
            (err.status_code(), Json(TriggerResponse::failed(err.to_string()))).into_response()
        }
    }
}

pub fn make_trigger_routes(state: ServerState) -> Router {
    Router::new()
        .route("/trigger", post(post_trigger))
        .with_state(state)
}
