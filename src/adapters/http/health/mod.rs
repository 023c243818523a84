//! Liveness and readiness probes. Bodies are not wrapped in the envelope.

mod handlers;

pub use handlers::{health, readiness};

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/readiness", get(readiness))
}
