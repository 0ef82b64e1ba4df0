//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Validation is a pure
//! function over the config and reports every problem it finds, not just
//! the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MetricsConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `log_level` is not one of the tracing levels.
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    /// `exposition.bind_address` does not parse as a socket address.
    #[error("invalid exposition bind address '{0}'")]
    InvalidBindAddress(String),

    /// The histogram has no buckets.
    #[error("histogram.buckets must not be empty")]
    EmptyBuckets,

    /// A bucket bound is zero or negative.
    #[error("histogram bucket bound {0} is not positive")]
    NonPositiveBucket(f64),

    /// Bucket bounds are not strictly increasing.
    #[error("histogram buckets not strictly increasing: {0} followed by {1}")]
    UnorderedBuckets(f64, f64),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &MetricsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.log_level.clone()));
    }

    // The bind address only matters when the endpoint is actually served.
    if config.exposition.enabled && config.exposition.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.exposition.bind_address.clone(),
        ));
    }

    let buckets = &config.histogram.buckets;
    if buckets.is_empty() {
        errors.push(ValidationError::EmptyBuckets);
    }
    for &bound in buckets {
        if bound <= 0.0 {
            errors.push(ValidationError::NonPositiveBucket(bound));
        }
    }
    for pair in buckets.windows(2) {
        if pair[1] <= pair[0] {
            errors.push(ValidationError::UnorderedBuckets(pair[0], pair[1]));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
