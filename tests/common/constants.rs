//! Shared constants for end-to-end tests
//!
//! When the test dataset changes, update only this file and fixtures.rs.

// ============================================================================
// Test Dataset
// ============================================================================

/// Number of films in the generated dataset
pub const FILM_COUNT: usize = 8;

/// Id of the film with the highest id, first in the "all films" grid
pub const NEWEST_FILM_ID: u64 = 8;

/// Title of film 1
pub const FILM_1_TITLE: &str = "Chungking Express";

/// Director with the most films (3)
pub const TOP_DIRECTOR: &str = "Bong Joon-ho";

/// Genre present in 5 films, enough to be rated
pub const RATED_GENRE: &str = "Drama";

/// Genre present in exactly 4 films, one short of being rated
pub const UNRATED_GENRE: &str = "Thriller";

/// Sum of the community ratings in the dataset
pub const GLOBAL_RATING_SUM: &str = "7.50";

/// Slug accepted by the trigger endpoint
pub const NEW_FILM_SLUG: &str = "past-lives";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
