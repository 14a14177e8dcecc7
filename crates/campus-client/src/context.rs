/// The workspace/organization a request runs under.
///
/// Passed explicitly into every call rather than read from ambient
/// session storage, so callers control it per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub org: String,
}

impl WorkspaceContext {
    pub fn new(org: impl Into<String>) -> Self {
        Self { org: org.into() }
    }
}
