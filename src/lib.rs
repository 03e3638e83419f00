//! Film Stats Server library
//!
//! Loads a watched-films dataset, computes the dashboard aggregations and
//! serves them over HTTP alongside the film submission trigger.

pub mod catalog;
pub mod config;
pub mod server;
pub mod stats;
pub mod trigger;

pub use catalog::{load_dataset, Film, FilmDataset};
pub use stats::{Dashboard, DashboardSettings};
