//! Turns a raw trigger body into validated pending films.

use super::error::TriggerError;
use super::models::{PendingFilm, RawFilmEntry, RawTriggerRequest};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;

const MAX_RATING: f64 = 5.0;

pub fn parse_request(body: &[u8]) -> Result<RawTriggerRequest, TriggerError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| TriggerError::MalformedBody(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(TriggerError::MalformedBody(
            "expected a JSON object".to_owned(),
        ));
    };

    match object.remove("films") {
        Some(films) => serde_json::from_value(films)
            .map(RawTriggerRequest::Batch)
            .map_err(|e| TriggerError::MalformedBody(format!("films: {}", e))),
        None => serde_json::from_value(Value::Object(object))
            .map(RawTriggerRequest::Single)
            .map_err(|e| TriggerError::MalformedBody(e.to_string())),
    }
}

/// Numbers pass through, numeric strings are parsed and anything else
/// counts as 0.
pub fn coerce_rating(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(true)) => Some(1.0),
        _ => None,
    };
    parsed.filter(|r| r.is_finite()).unwrap_or(0.0)
}

fn is_valid_rating(rating: f64) -> bool {
    (0.0..=MAX_RATING).contains(&rating) && (rating * 2.0).fract() == 0.0
}

fn normalize_slug(slug: Option<&str>) -> Result<String, TriggerError> {
    let slug = slug.map(str::trim).unwrap_or_default();
    if slug.is_empty() {
        return Err(TriggerError::MissingSlug);
    }
    if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TriggerError::MalformedSlug(slug.to_owned()));
    }
    Ok(slug.to_owned())
}

pub fn normalize_entry(
    entry: &RawFilmEntry,
    now: DateTime<Utc>,
) -> Result<PendingFilm, TriggerError> {
    let slug = normalize_slug(entry.slug.as_deref())?;
    let rating_i = coerce_rating(entry.rating_i.as_ref());
    let rating_v = coerce_rating(entry.rating_v.as_ref());
    for value in [rating_i, rating_v] {
        if !is_valid_rating(value) {
            return Err(TriggerError::InvalidRating { slug, value });
        }
    }
    Ok(PendingFilm {
        slug,
        rating_i,
        rating_v,
        timestamp: now,
    })
}

/// Validates every entry, failing on the first invalid one. Repeated slugs
/// keep their first occurrence.
pub fn normalize_request(
    request: &RawTriggerRequest,
    now: DateTime<Utc>,
) -> Result<Vec<PendingFilm>, TriggerError> {
    let entries = match request {
        RawTriggerRequest::Batch(films) if films.is_empty() => {
            return Err(TriggerError::EmptyBatch)
        }
        RawTriggerRequest::Batch(films) => films.as_slice(),
        RawTriggerRequest::Single(entry) => std::slice::from_ref(entry),
    };

    let mut seen = HashSet::new();
    let mut pending = Vec::with_capacity(entries.len());
    for entry in entries {
        let film = normalize_entry(entry, now)?;
        if seen.insert(film.slug.clone()) {
            pending.push(film);
        }
    }
    Ok(pending)
}
