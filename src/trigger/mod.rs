//! New film submissions: validation of trigger calls, forwarding to the
//! automation hook and the client side staging queue.

mod client;
mod dispatcher;
mod error;
mod models;
mod staging;
mod validation;

pub use client::{FilmSubmitter, TriggerClient, TRIGGER_PATH};
pub use dispatcher::{HookDispatcher, UpdateDispatcher};
pub use error::TriggerError;
pub use models::{
    FilmEntry, PendingFilm, RawFilmEntry, RawTriggerRequest, TriggerRequest, TriggerResponse,
};
pub use staging::{RetryReport, SubmissionQueue};
pub use validation::{coerce_rating, normalize_entry, normalize_request, parse_request};
