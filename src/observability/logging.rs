//! Logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the configured default level.
///
/// `RUST_LOG` takes precedence when set. A second call is a no-op, so
/// embedding hosts and tests may both call this.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "resolver_metrics={level},tower_http=info"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
