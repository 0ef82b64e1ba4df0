//! Metric definitions and registration.
//!
//! # Metrics
//! - `resolver_request_duration_seconds` (histogram): latency of each
//!   top-level field resolution, labeled by `operation`, `fieldName`,
//!   `status`
//!
//! # Cardinality
//! - `operation`: bounded by the client's named operations (plus "unknown")
//! - `fieldName`: bounded by the schema's root fields
//! - `status`: 2 values (success, error)

use std::time::Duration;

use prometheus::{HistogramOpts, HistogramVec, Registry};
use thiserror::Error;

use crate::config::schema::HistogramConfig;
use crate::execution::types::ResolveStatus;

/// Name of the resolver duration histogram.
pub const DURATION_METRIC: &str = "resolver_request_duration_seconds";

const DURATION_HELP: &str = "Duration of each resolver request";

// `fieldName` keeps its original casing; existing dashboards match on it.
const DURATION_LABELS: [&str; 3] = ["operation", "fieldName", "status"];

/// Errors raised while setting up metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Creating or registering a metric failed.
    #[error("metric registration failed: {0}")]
    Registration(#[from] prometheus::Error),
}

/// Handle to the resolver duration histogram.
///
/// Cheap to clone; all clones write into the same registered collector.
#[derive(Clone)]
pub struct ResolverMetrics {
    duration: HistogramVec,
}

impl ResolverMetrics {
    /// Create the duration histogram and register it with `registry`.
    ///
    /// Fails if the metric is already registered or the bucket layout is
    /// rejected. This is the only fallible metrics operation; recording
    /// itself cannot fail.
    pub fn register(registry: &Registry, config: &HistogramConfig) -> Result<Self, MetricsError> {
        let opts =
            HistogramOpts::new(DURATION_METRIC, DURATION_HELP).buckets(config.buckets.clone());
        let duration = HistogramVec::new(opts, &DURATION_LABELS)?;
        registry.register(Box::new(duration.clone()))?;

        tracing::info!(metric = DURATION_METRIC, "Resolver duration histogram registered");

        Ok(Self { duration })
    }

    /// Record one field-resolution observation.
    pub fn record_resolution(
        &self,
        operation: &str,
        field_name: &str,
        status: ResolveStatus,
        elapsed: Duration,
    ) {
        self.duration
            .with_label_values(&[operation, field_name, status.as_str()])
            .observe(elapsed.as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_record() {
        let registry = Registry::new();
        let metrics =
            ResolverMetrics::register(&registry, &HistogramConfig::default()).unwrap();

        metrics.record_resolution(
            "GetUser",
            "user",
            ResolveStatus::Success,
            Duration::from_millis(12),
        );

        let families = registry.gather();
        let family = families
            .iter()
            .find(|f| f.get_name() == DURATION_METRIC)
            .expect("histogram family present");
        assert_eq!(family.get_metric().len(), 1);
        assert_eq!(family.get_metric()[0].get_histogram().get_sample_count(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = Registry::new();
        let config = HistogramConfig::default();

        ResolverMetrics::register(&registry, &config).unwrap();
        let err = ResolverMetrics::register(&registry, &config);
        assert!(matches!(err, Err(MetricsError::Registration(_))));
    }
}
