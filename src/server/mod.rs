pub mod config;
mod film_routes;
mod http_layers;
pub mod metrics;
#[allow(clippy::module_inception)]
pub mod server;
pub mod state;
mod stats_routes;
mod trigger_routes;

pub use config::ServerConfig;
pub use film_routes::FILMS_PAGE_SIZE;
pub use http_layers::*;
pub use server::{make_app, run_server};
