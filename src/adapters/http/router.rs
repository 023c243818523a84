//! Router assembly and cross-cutting layers.

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, extract::Request, middleware, BoxError, Router};
use http::{header, HeaderValue, Method};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::domain::foundation::DomainError;

use super::context::REQUEST_ID_HEADER;
use super::error::ApiError;
use super::health::health_routes;
use super::ledger::ledger_routes;
use super::middleware::{require_api_key, ApiKeyGuard};
use super::signin::{signin_routes, webhook_routes};
use super::state::AppState;
use super::users::user_routes;

pub const API_PREFIX: &str = "/api/v1";

/// Settings for the layers around the API.
#[derive(Clone)]
pub struct RouterOptions {
    pub api_key: ApiKeyGuard,
    pub request_timeout: Duration,
    pub cors_origins: Vec<String>,
}

impl RouterOptions {
    /// The key guard is switched off in development.
    pub fn from_config(config: &ServerConfig) -> Self {
        let api_key = match (&config.api_key, config.is_development()) {
            (Some(key), false) => ApiKeyGuard::required(key.clone()),
            _ => ApiKeyGuard::disabled(),
        };
        Self {
            api_key,
            request_timeout: config.request_timeout(),
            cors_origins: config.cors_origins_list(),
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            api_key: ApiKeyGuard::disabled(),
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the full application router.
///
/// User, ledger and sign-in start routes sit behind the API key guard.
/// The signer's webhook and the probes do not.
pub fn build_router(state: AppState, options: RouterOptions) -> Router {
    let guarded = Router::new()
        .merge(user_routes())
        .merge(ledger_routes())
        .merge(signin_routes())
        .route_layer(middleware::from_fn_with_state(
            options.api_key.clone(),
            require_api_key,
        ));

    let api = guarded
        .merge(webhook_routes())
        .merge(health_routes())
        .with_state(state);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(HandleErrorLayer::new(handle_timeout))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(not_found)
        .layer(layers)
}

/// Elapsed requests get the usual error envelope instead of a bare status.
async fn handle_timeout(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("request exceeded its timeout");
        ApiError::from(DomainError::upstream("request timed out"))
    } else {
        ApiError::from(DomainError::internal(err.to_string()))
    }
}

async fn not_found() -> ApiError {
    ApiError::from(DomainError::not_found("Resource not found"))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-api-key"),
            header::HeaderName::from_static("x-wallet-seed"),
            header::HeaderName::from_static("x-request-id"),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use secrecy::SecretString;

    #[test]
    fn guard_is_off_in_development() {
        let config = ServerConfig {
            api_key: Some(SecretString::new("k".to_string())),
            ..Default::default()
        };
        assert!(!RouterOptions::from_config(&config).api_key.is_enabled());
    }

    #[test]
    fn guard_is_on_elsewhere() {
        let config = ServerConfig {
            environment: Environment::Staging,
            api_key: Some(SecretString::new("k".to_string())),
            ..Default::default()
        };
        assert!(RouterOptions::from_config(&config).api_key.is_enabled());
    }
}
