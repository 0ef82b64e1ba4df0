//! Resolver duration recording.
//!
//! # Responsibilities
//! - Skip introspection requests entirely
//! - Skip nested (non-root) field resolutions
//! - Time each instrumented resolution from start to completion
//! - Emit exactly one labeled observation per instrumented field

use std::sync::Arc;
use std::time::Instant;

use crate::execution::plugin::{ExecutionPlugin, RequestObserver, ResolveCompletion};
use crate::execution::types::{FieldInfo, RequestContext, ResolveOutcome};
use crate::observability::metrics::ResolverMetrics;

/// Plugin that measures top-level resolver latency.
pub struct ResolverDurationRecorder {
    metrics: Arc<ResolverMetrics>,
}

impl ResolverDurationRecorder {
    /// Create a recorder writing into the given metrics handle.
    pub fn new(metrics: Arc<ResolverMetrics>) -> Self {
        Self { metrics }
    }
}

impl ExecutionPlugin for ResolverDurationRecorder {
    fn request_did_start(&self, ctx: &RequestContext) -> Option<Box<dyn RequestObserver>> {
        if ctx.is_introspection() {
            tracing::debug!("Introspection query, not instrumenting");
            return None;
        }

        Some(Box::new(RequestRecorder {
            operation: ctx.operation_label().to_owned(),
            metrics: Arc::clone(&self.metrics),
        }))
    }
}

/// Per-request observer holding the resolved operation label.
struct RequestRecorder {
    operation: String,
    metrics: Arc<ResolverMetrics>,
}

impl RequestObserver for RequestRecorder {
    fn will_resolve_field(&mut self, field: &FieldInfo) -> Option<Box<dyn ResolveCompletion>> {
        // Only root-level resolutions are measured.
        if !field.path.is_root() {
            return None;
        }

        Some(Box::new(ResolutionTimer {
            operation: self.operation.clone(),
            field_name: field.field_name.clone(),
            started: Instant::now(),
            metrics: Arc::clone(&self.metrics),
        }))
    }
}

/// Running timer for one field resolution.
struct ResolutionTimer {
    operation: String,
    field_name: String,
    started: Instant,
    metrics: Arc<ResolverMetrics>,
}

impl ResolveCompletion for ResolutionTimer {
    fn resolve_did_end(self: Box<Self>, outcome: ResolveOutcome) {
        let elapsed = self.started.elapsed();
        self.metrics.record_resolution(
            &self.operation,
            &self.field_name,
            outcome.status(),
            elapsed,
        );
    }
}
