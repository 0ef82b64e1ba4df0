//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! recorder.rs (ExecutionPlugin impl)
//!     → metrics.rs (resolver duration histogram)
//!         → exposition.rs (/metrics scrape endpoint)
//!
//! logging.rs → structured log events (stdout)
//! ```
//!
//! # Design Decisions
//! - The registry is constructed by the host and passed by handle; nothing
//!   here is process-global
//! - The observation path is infallible so the engine never sees a failure
//! - Histogram writes are atomic increments, safe under concurrent requests

pub mod exposition;
pub mod logging;
pub mod metrics;
pub mod recorder;

pub use metrics::ResolverMetrics;
pub use recorder::ResolverDurationRecorder;
