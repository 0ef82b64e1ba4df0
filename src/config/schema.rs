//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! instrumentation layer. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for resolver metrics.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Scrape endpoint settings.
    pub exposition: ExpositionConfig,

    /// Duration histogram settings.
    pub histogram: HistogramConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            exposition: ExpositionConfig::default(),
            histogram: HistogramConfig::default(),
        }
    }
}

/// Scrape endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExpositionConfig {
    /// Enable the scrape endpoint.
    pub enabled: bool,

    /// Scrape endpoint bind address.
    pub bind_address: String,
}

impl Default for ExpositionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Duration histogram configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Upper bounds of the histogram buckets in seconds, strictly increasing.
    pub buckets: Vec<f64>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            buckets: vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        }
    }
}
