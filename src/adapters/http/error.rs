//! Mapping from the domain error taxonomy to HTTP responses.
//!
//! The status table is fixed. Upstream and internal failures are reported
//! to callers with a generic message; their detail goes to the log only.
//! Logging happens inside the request span, which carries `request_id`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::envelope::{Envelope, ErrorBody};

pub const UPSTREAM_MESSAGE: &str = "A dependency of this service failed. Please try again later.";
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred.";

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Missing or wrong `X-API-Key`.
    Forbidden,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => status_for(err.code),
            ApiError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Fixed status table for the error taxonomy.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::Duplicate => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Upstream | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Domain(DomainError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = match self {
            ApiError::Forbidden => {
                tracing::warn!("rejected request with invalid API key");
                let detail = "Could not validate credentials";
                Envelope::failure(
                    detail,
                    ErrorBody {
                        code: "FORBIDDEN".to_string(),
                        detail: detail.to_string(),
                        fields: None,
                    },
                )
            }
            ApiError::Domain(err) => {
                let message = match err.code {
                    ErrorCode::Upstream => {
                        tracing::error!(code = %err.code, error = %err.message, "upstream failure");
                        UPSTREAM_MESSAGE.to_string()
                    }
                    ErrorCode::Internal => {
                        tracing::error!(code = %err.code, error = %err.message, "internal failure");
                        INTERNAL_MESSAGE.to_string()
                    }
                    _ => {
                        tracing::info!(code = %err.code, error = %err.message, "request rejected");
                        err.message.clone()
                    }
                };
                let fields = if err.code == ErrorCode::ValidationFailed && !err.details.is_empty() {
                    Some(err.details.clone())
                } else if !err.references.is_empty() {
                    Some(err.references.clone())
                } else {
                    None
                };
                Envelope::failure(
                    message.clone(),
                    ErrorBody {
                        code: err.code.to_string(),
                        detail: message,
                        fields,
                    },
                )
            }
        };
        (status, Json(envelope)).into_response()
    }
}
