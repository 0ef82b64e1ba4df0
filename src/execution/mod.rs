//! Typed interface to the host GraphQL execution engine.
//!
//! # Data Flow
//! ```text
//! Host engine, once per request:
//!     RequestContext → plugin.rs (request_did_start)
//!         → per-field: FieldInfo → will_resolve_field
//!             → on completion: ResolveOutcome → resolve_did_end
//! ```
//!
//! # Design Decisions
//! - Every hook returns Option: None opts out, nothing is an error
//! - Completion consumes its receiver, so it can fire at most once
//! - Plugins never raise into the engine; all hooks are infallible

pub mod plugin;
pub mod types;

pub use plugin::{ExecutionPlugin, RequestObserver, ResolveCompletion};
pub use types::{
    ErrorInfo, FieldInfo, FieldPath, PathSegment, RequestContext, ResolveOutcome, ResolveStatus,
};
