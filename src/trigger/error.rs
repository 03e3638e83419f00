use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TriggerError {
    #[error("Film slug is missing")]
    MissingSlug,

    #[error("Malformed film slug: {0}")]
    MalformedSlug(String),

    #[error("Invalid rating {value} for {slug}, expected 0 to 5 in half steps")]
    InvalidRating { slug: String, value: f64 },

    #[error("No films to submit")]
    EmptyBatch,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Update hook is not configured")]
    NotConfigured,

    #[error("Update hook call failed: {0}")]
    Upstream(String),
}

impl TriggerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TriggerError::MissingSlug
            | TriggerError::MalformedSlug(_)
            | TriggerError::InvalidRating { .. }
            | TriggerError::EmptyBatch
            | TriggerError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            TriggerError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            TriggerError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            TriggerError::NotConfigured => "not_configured",
            TriggerError::Upstream(_) => "upstream_error",
            _ => "invalid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_status_codes() {
        assert_eq!(TriggerError::MissingSlug.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(TriggerError::EmptyBatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            TriggerError::NotConfigured.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TriggerError::Upstream("timeout".to_owned()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
