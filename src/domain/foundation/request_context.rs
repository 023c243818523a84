//! Per-request context passed explicitly through every handler call.

use std::fmt;

use uuid::Uuid;

/// Correlation data for one inbound request.
///
/// Handlers receive this by reference on each call instead of storing it,
/// so a shared handler instance never carries one request's id into
/// another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: String,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Context with a freshly generated correlation id.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = RequestContext::generate();
        let b = RequestContext::generate();
        assert_ne!(a, b);
        assert_eq!(a.request_id().len(), 36);
    }
}
