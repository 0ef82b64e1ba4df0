//! GraphQL Resolver Duration Metrics
//!
//! Instrumentation plugin for a GraphQL server: measures wall-clock latency
//! of every top-level field resolution and records it into a Prometheus
//! histogram labeled by operation, field name and outcome.
//!
//! # Architecture Overview
//!
//! ```text
//!   Host GraphQL engine                    resolver-metrics
//!   ───────────────────                    ────────────────
//!   request arrives ────────────────────▶  ExecutionPlugin::request_did_start
//!                                              │ skip introspection queries
//!   field resolution begins ────────────▶  RequestObserver::will_resolve_field
//!                                              │ skip non-root fields
//!   field resolution completes ─────────▶  ResolveCompletion::resolve_did_end
//!                                              │ one observation
//!                                              ▼
//!                                          resolver_request_duration_seconds
//!                                          {operation, fieldName, status}
//!                                              │
//!   Prometheus scrape ◀─────────────────── GET /metrics (exposition)
//! ```
//!
//! The histogram lives in a `prometheus::Registry` constructed by the host's
//! startup sequence and passed into [`ResolverMetrics::register`]; there is
//! no process-global metric state.

// Core subsystems
pub mod config;
pub mod execution;

// Cross-cutting concerns
pub mod observability;

pub use config::schema::MetricsConfig;
pub use execution::plugin::{ExecutionPlugin, RequestObserver, ResolveCompletion};
pub use execution::types::{FieldInfo, RequestContext, ResolveOutcome};
pub use observability::metrics::ResolverMetrics;
pub use observability::recorder::ResolverDurationRecorder;
