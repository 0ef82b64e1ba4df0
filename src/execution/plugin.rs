//! Plugin contract driven by the host execution engine.
//!
//! The engine calls [`ExecutionPlugin::request_did_start`] once per inbound
//! request. A plugin that wants to observe the request returns a
//! [`RequestObserver`]; the engine then calls
//! [`RequestObserver::will_resolve_field`] as each field resolution begins
//! and invokes the returned [`ResolveCompletion`] exactly once when it ends.

use crate::execution::types::{FieldInfo, RequestContext, ResolveOutcome};

/// Registration point the engine calls once per request.
///
/// Implementations are shared across concurrent requests.
pub trait ExecutionPlugin: Send + Sync {
    /// Called when a request begins. Return `None` to skip the whole request.
    fn request_did_start(&self, ctx: &RequestContext) -> Option<Box<dyn RequestObserver>>;
}

/// Per-request observer.
pub trait RequestObserver: Send {
    /// Called as a field resolution begins. Return `None` to skip this field.
    fn will_resolve_field(&mut self, field: &FieldInfo) -> Option<Box<dyn ResolveCompletion>>;
}

/// Completion callback for one field resolution.
pub trait ResolveCompletion: Send {
    /// Called when the field's resolution completes.
    ///
    /// Consumes the receiver: a completion fires at most once.
    fn resolve_did_end(self: Box<Self>, outcome: ResolveOutcome);
}
