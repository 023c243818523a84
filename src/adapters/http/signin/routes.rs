//! HTTP routes for sign-in endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{authenticate, get_signin_payload, signin_webhook};

/// Caller-facing sign-in routes.
pub fn signin_routes() -> Router<AppState> {
    Router::new()
        .route("/xumm/auth/", get(authenticate))
        .route("/xumm/auth", get(authenticate))
        .route("/xumm/payload/:uuid", get(get_signin_payload))
}

/// The signer's callback. Kept apart so the API key guard never covers it.
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/xumm/webhook", post(signin_webhook))
}
