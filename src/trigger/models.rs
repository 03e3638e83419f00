use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A film entry as sent by submitters: the film's slug and both viewers'
/// ratings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilmEntry {
    pub slug: String,
    pub rating_i: f64,
    pub rating_v: f64,
}

impl FilmEntry {
    pub fn new<S: Into<String>>(slug: S, rating_i: f64, rating_v: f64) -> FilmEntry {
        FilmEntry {
            slug: slug.into(),
            rating_i,
            rating_v,
        }
    }
}

/// Body of a trigger call. A batch is what a staged submission sends, a
/// single entry is what a retry sends.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TriggerRequest {
    Batch { films: Vec<FilmEntry> },
    Single(FilmEntry),
}

impl TriggerRequest {
    pub fn entries(&self) -> &[FilmEntry] {
        match self {
            TriggerRequest::Batch { films } => films,
            TriggerRequest::Single(entry) => std::slice::from_ref(entry),
        }
    }
}

/// An entry as received, before coercion and validation. Ratings may be
/// numbers, numeric strings or anything else.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFilmEntry {
    pub slug: Option<String>,
    pub rating_i: Option<serde_json::Value>,
    pub rating_v: Option<serde_json::Value>,
}

#[derive(Clone, Debug)]
pub enum RawTriggerRequest {
    Batch(Vec<RawFilmEntry>),
    Single(RawFilmEntry),
}

/// A validated entry, ready to be forwarded to the automation hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingFilm {
    pub slug: String,
    pub rating_i: f64,
    pub rating_v: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slugs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TriggerResponse {
    pub fn accepted(films: &[PendingFilm]) -> TriggerResponse {
        let message = match films {
            [single] => format!("Film {} queued for update", single.slug),
            _ => format!("{} films queued for update", films.len()),
        };
        TriggerResponse {
            success: true,
            message: Some(message),
            slugs: films.iter().map(|f| f.slug.clone()).collect(),
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(error: S) -> TriggerResponse {
        TriggerResponse {
            success: false,
            message: None,
            slugs: vec![],
            error: Some(error.into()),
        }
    }
}
