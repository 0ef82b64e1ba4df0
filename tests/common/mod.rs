//! Shared utilities for integration testing.
//!
//! Stands in for the host execution engine: drives a plugin through the
//! request lifecycle the way the engine would, and inspects the registry the
//! way a scraper would.

use prometheus::Registry;
use resolver_metrics::execution::plugin::{ExecutionPlugin, RequestObserver, ResolveCompletion};
use resolver_metrics::execution::types::{FieldInfo, RequestContext, ResolveOutcome};
use resolver_metrics::observability::metrics::DURATION_METRIC;

/// Drive one request through a plugin: start the request, then resolve each
/// scripted field in order, delivering its completion immediately.
pub fn drive_request(
    plugin: &dyn ExecutionPlugin,
    ctx: &RequestContext,
    fields: Vec<(FieldInfo, ResolveOutcome)>,
) {
    let Some(mut observer) = plugin.request_did_start(ctx) else {
        return;
    };

    for (info, outcome) in fields {
        if let Some(completion) = observer.will_resolve_field(&info) {
            completion.resolve_did_end(outcome);
        }
    }
}

/// Observation count for one `{operation, fieldName, status}` series.
#[allow(dead_code)]
pub fn resolution_count(registry: &Registry, operation: &str, field_name: &str, status: &str) -> u64 {
    for family in registry.gather() {
        if family.get_name() != DURATION_METRIC {
            continue;
        }
        for metric in family.get_metric() {
            let matches = metric.get_label().iter().all(|label| {
                match label.get_name() {
                    "operation" => label.get_value() == operation,
                    "fieldName" => label.get_value() == field_name,
                    "status" => label.get_value() == status,
                    _ => false,
                }
            });
            if matches {
                return metric.get_histogram().get_sample_count();
            }
        }
    }
    0
}

/// Total observation count across every series of the duration histogram.
#[allow(dead_code)]
pub fn total_resolutions(registry: &Registry) -> u64 {
    registry
        .gather()
        .iter()
        .filter(|family| family.get_name() == DURATION_METRIC)
        .flat_map(|family| family.get_metric())
        .map(|metric| metric.get_histogram().get_sample_count())
        .sum()
}
