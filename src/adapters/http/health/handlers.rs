use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::adapters::http::state::AppState;
use crate::domain::foundation::RequestContext;

#[derive(Debug, Serialize)]
struct ProbeBody {
    status: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    checks: Option<Checks>,
}

#[derive(Debug, Serialize)]
struct Checks {
    database: &'static str,
    queue: &'static str,
}

/// GET /api/v1/health - the process is up
pub async fn health() -> Response {
    let body = ProbeBody {
        status: "Healthy",
        message: "Service is up and running.",
        checks: None,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /api/v1/readiness - the record store and the queue both answer
pub async fn readiness(State(state): State<AppState>, ctx: RequestContext) -> Response {
    let (database, queue) = tokio::join!(state.users.ping(), state.queue.ping());

    if let Err(e) = &database {
        tracing::warn!(request_id = %ctx, error = %e, "readiness: record store unavailable");
    }
    if let Err(e) = &queue {
        tracing::warn!(request_id = %ctx, error = %e, "readiness: queue unavailable");
    }

    let checks = Checks {
        database: if database.is_ok() { "ok" } else { "unavailable" },
        queue: if queue.is_ok() { "ok" } else { "unavailable" },
    };

    if database.is_ok() && queue.is_ok() {
        let body = ProbeBody {
            status: "Ready",
            message: "Service is ready to accept traffic.",
            checks: Some(checks),
        };
        (StatusCode::OK, Json(body)).into_response()
    } else {
        let body = ProbeBody {
            status: "Not Ready",
            message: "A dependency of this service is unavailable.",
            checks: Some(checks),
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
    }
}
