//! `RequestContext` extractor.
//!
//! Reads the `x-request-id` header set by `SetRequestIdLayer`. A request
//! that somehow bypassed the layer gets a fresh id.

use axum::http::request::Parts;

use crate::domain::foundation::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

impl<S> axum::extract::FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move { Ok(request_context(parts)) })
    }
}

fn request_context(parts: &Parts) -> RequestContext {
    parts
        .headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(RequestContext::new)
        .unwrap_or_else(RequestContext::generate)
}
