//! Request and field-resolution types shared with the host engine.

/// Reserved operation name clients use for schema introspection.
pub const INTROSPECTION_QUERY: &str = "IntrospectionQuery";

/// Operation label recorded when a request carries no operation name.
pub const UNKNOWN_OPERATION: &str = "unknown";

/// What the engine knows about a request when it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Client-supplied operation name, if any.
    pub operation_name: Option<String>,
}

impl RequestContext {
    /// Context for a named operation.
    pub fn named(operation: impl Into<String>) -> Self {
        Self {
            operation_name: Some(operation.into()),
        }
    }

    /// Context for a request without an operation name.
    pub fn anonymous() -> Self {
        Self {
            operation_name: None,
        }
    }

    /// Whether this request is the reserved schema introspection query.
    ///
    /// Only an operation actually named `IntrospectionQuery` qualifies; an
    /// absent name is never introspection.
    pub fn is_introspection(&self) -> bool {
        self.operation_name.as_deref() == Some(INTROSPECTION_QUERY)
    }

    /// Operation name for labeling, falling back to the unknown sentinel.
    pub fn operation_label(&self) -> &str {
        self.operation_name.as_deref().unwrap_or(UNKNOWN_OPERATION)
    }
}

/// One step in a response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field.
    Field(String),

    /// A list index.
    Index(usize),
}

/// Position of a field in the response tree, from the root down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Path of a root-level field.
    pub fn root(field_name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(field_name.into())],
        }
    }

    /// Extend this path with a child segment.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Whether the path has no parent, i.e. a top-level field.
    pub fn is_root(&self) -> bool {
        self.segments.len() <= 1
    }

    /// Path segments from the root down.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// Field metadata handed to the per-field hook.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Name of the field being resolved.
    pub field_name: String,

    /// Where the field sits in the response tree.
    pub path: FieldPath,
}

impl FieldInfo {
    /// Info for a root-level field.
    pub fn root(field_name: impl Into<String>) -> Self {
        let field_name = field_name.into();
        let path = FieldPath::root(field_name.clone());
        Self { field_name, path }
    }
}

/// Minimal description of a failed resolution.
///
/// The engine keeps ownership of the underlying error; this is only what
/// observers are shown.
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Human-readable failure message.
    pub message: String,
}

impl ErrorInfo {
    /// Wrap a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// How a field resolution ended.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// The resolver produced a value.
    Ok,

    /// The resolver failed.
    Failed(ErrorInfo),
}

impl ResolveOutcome {
    /// Status classification for this outcome.
    pub fn status(&self) -> ResolveStatus {
        match self {
            ResolveOutcome::Ok => ResolveStatus::Success,
            ResolveOutcome::Failed(_) => ResolveStatus::Error,
        }
    }
}

/// Outcome classification used as the `status` metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    Success,
    Error,
}

impl ResolveStatus {
    /// Label value for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ResolveStatus::Success => "success",
            ResolveStatus::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_detection() {
        assert!(RequestContext::named("IntrospectionQuery").is_introspection());
        assert!(!RequestContext::named("GetUser").is_introspection());
        assert!(!RequestContext::anonymous().is_introspection());
    }

    #[test]
    fn test_operation_label_fallback() {
        assert_eq!(RequestContext::named("GetUser").operation_label(), "GetUser");
        assert_eq!(RequestContext::anonymous().operation_label(), "unknown");
    }

    #[test]
    fn test_path_root_detection() {
        let root = FieldPath::root("user");
        assert!(root.is_root());

        let nested = root.child(PathSegment::Field("friends".to_string()));
        assert!(!nested.is_root());

        let indexed = nested.child(PathSegment::Index(0));
        assert!(!indexed.is_root());
        assert_eq!(indexed.segments().len(), 3);
    }

    #[test]
    fn test_outcome_status() {
        assert_eq!(ResolveOutcome::Ok.status(), ResolveStatus::Success);
        assert_eq!(
            ResolveOutcome::Failed(ErrorInfo::new("boom")).status(),
            ResolveStatus::Error
        );
        assert_eq!(ResolveStatus::Success.as_str(), "success");
        assert_eq!(ResolveStatus::Error.as_str(), "error");
    }
}
