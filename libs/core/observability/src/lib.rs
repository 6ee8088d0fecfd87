//! Metrics for the events service.
//!
//! - Prometheus recorder installation and the `/metrics` handler
//! - Geocoding metrics: provider calls, admission outcomes, map cache hits
//! - Axum middleware for per-route request metrics
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, GeocodingMetrics};
//!
//! init_metrics()?;
//! GeocodingMetrics::record_admission(AdmissionOutcome::Admitted);
//!
//! let app = Router::new().route("/metrics", get(metrics_handler));
//! ```

pub mod geocoding;
pub mod middleware;

pub use geocoding::{AdmissionOutcome, GeocodingMetrics, ProviderOperation};
pub use middleware::metrics_middleware;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
#[error("Failed to install Prometheus recorder: {0}")]
pub struct MetricsInitError(#[from] BuildError);

/// Installs the global Prometheus recorder.
///
/// Call once at startup; later calls return the existing handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, MetricsInitError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    describe_counter!(
        "geocoding_provider_calls_total",
        "Geocoding provider calls by operation and outcome"
    );
    describe_histogram!(
        "geocoding_provider_call_duration_seconds",
        "Geocoding provider call duration in seconds"
    );
    describe_counter!(
        "geocoding_admissions_total",
        "Address admission decisions by outcome"
    );
    describe_counter!("map_cache_hits_total", "Map image cache hits");
    describe_counter!("map_cache_misses_total", "Map image cache misses");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_metrics_handler_without_recorder() {
        if get_metrics_handle().is_none() {
            assert_eq!(metrics_handler().await, "# Metrics not initialized\n");
        }
    }
}
