use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, GaugeVec, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all film stats metrics
const PREFIX: &str = "filmstats";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Dataset Metrics
    pub static ref DATASET_ITEMS_TOTAL: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_dataset_items_total"), "Total items in the film dataset"),
        &["type"]
    ).expect("Failed to create dataset_items_total metric");

    // Trigger Metrics
    pub static ref TRIGGER_SUBMISSIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_trigger_submissions_total"), "Trigger calls by outcome"),
        &["outcome"]
    ).expect("Failed to create trigger_submissions_total metric");

    pub static ref TRIGGER_FILMS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_trigger_films_total"), "Films forwarded to the update hook"),
        &["outcome"]
    ).expect("Failed to create trigger_films_total metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(DATASET_ITEMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(TRIGGER_SUBMISSIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(TRIGGER_FILMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROCESS_MEMORY_BYTES.clone()));

    tracing::info!("Metrics system initialized successfully");
}

pub fn init_dataset_metrics(num_films: usize, num_directors: usize, num_countries: usize) {
    DATASET_ITEMS_TOTAL
        .with_label_values(&["film"])
        .set(num_films as f64);

    DATASET_ITEMS_TOTAL
        .with_label_values(&["director"])
        .set(num_directors as f64);

    DATASET_ITEMS_TOTAL
        .with_label_values(&["country"])
        .set(num_countries as f64);

    tracing::info!(
        "Dataset metrics initialized: {} films, {} directors, {} countries",
        num_films,
        num_directors,
        num_countries
    );
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record one trigger call and the number of films it carried
pub fn record_trigger_submission(outcome: &str, num_films: usize) {
    TRIGGER_SUBMISSIONS_TOTAL
        .with_label_values(&[outcome])
        .inc();

    TRIGGER_FILMS_TOTAL
        .with_label_values(&[outcome])
        .inc_by(num_films as f64);
}

pub fn update_memory_usage() {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            let rss_kb = status
                .lines()
                .find(|line| line.starts_with("VmRSS:"))
                .and_then(|line| line.split_whitespace().nth(1))
                .and_then(|kb| kb.parse::<f64>().ok());
            if let Some(kb) = rss_kb {
                PROCESS_MEMORY_BYTES.set(kb * 1024.0);
            }
        }
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    update_memory_usage();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_default();
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
