//! API key middleware.
//!
//! The guard compares the `X-API-Key` header against the configured key in
//! constant time. A guard built without a key lets every request through;
//! that is the development setup.
//!
//! ```text
//! Request -> require_api_key -> handler
//!                 |
//!                 +-- 403 envelope on a missing or wrong key
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::adapters::http::error::ApiError;

pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Clone, Default)]
pub struct ApiKeyGuard {
    expected: Option<Arc<SecretString>>,
}

impl ApiKeyGuard {
    /// Guard that requires `key` on every request.
    pub fn required(key: SecretString) -> Self {
        Self {
            expected: Some(Arc::new(key)),
        }
    }

    /// Guard that accepts every request.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    fn accepts(&self, presented: Option<&str>) -> bool {
        match (&self.expected, presented) {
            (None, _) => true,
            (Some(expected), Some(presented)) => expected
                .expose_secret()
                .as_bytes()
                .ct_eq(presented.as_bytes())
                .into(),
            (Some(_), None) => false,
        }
    }
}

pub async fn require_api_key(
    State(guard): State<ApiKeyGuard>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    if guard.accepts(presented) {
        next.run(request).await
    } else {
        ApiError::Forbidden.into_response()
    }
}
