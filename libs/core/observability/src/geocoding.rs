//! Geocoding and map metrics.

use metrics::{counter, histogram};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOperation {
    Forward,
    Reverse,
    StaticMap,
}

impl ProviderOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::StaticMap => "static_map",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Admitted,
    OutOfBounds,
    NotResolved,
    Unavailable,
}

impl AdmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admitted => "admitted",
            Self::OutOfBounds => "out_of_bounds",
            Self::NotResolved => "not_resolved",
            Self::Unavailable => "unavailable",
        }
    }
}

pub struct GeocodingMetrics;

impl GeocodingMetrics {
    /// Record one call to the geocoding provider.
    pub fn record_provider_call(operation: ProviderOperation, success: bool, elapsed: Duration) {
        let outcome = if success { "success" } else { "failure" };
        counter!(
            "geocoding_provider_calls_total",
            "operation" => operation.as_str(),
            "outcome" => outcome
        )
        .increment(1);
        histogram!(
            "geocoding_provider_call_duration_seconds",
            "operation" => operation.as_str()
        )
        .record(elapsed.as_secs_f64());

        tracing::debug!(
            operation = operation.as_str(),
            outcome,
            duration_ms = elapsed.as_millis() as u64,
            "Geocoding provider call"
        );
    }

    pub fn record_admission(outcome: AdmissionOutcome) {
        counter!("geocoding_admissions_total", "outcome" => outcome.as_str()).increment(1);
    }

    pub fn record_map_cache(hit: bool) {
        if hit {
            counter!("map_cache_hits_total").increment(1);
        } else {
            counter!("map_cache_misses_total").increment(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(ProviderOperation::StaticMap.as_str(), "static_map");
        assert_eq!(AdmissionOutcome::OutOfBounds.as_str(), "out_of_bounds");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        GeocodingMetrics::record_provider_call(
            ProviderOperation::Forward,
            true,
            Duration::from_millis(12),
        );
        GeocodingMetrics::record_admission(AdmissionOutcome::Admitted);
        GeocodingMetrics::record_map_cache(false);
    }
}
