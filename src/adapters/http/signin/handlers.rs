//! HTTP handlers for sign-in endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
};

use crate::adapters::http::envelope::ok;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{GetSignInPayloadQuery, HandleSignInWebhookCommand};
use crate::domain::foundation::RequestContext;

use super::dto::WebhookAck;

/// GET /api/v1/xumm/auth/ - Start a sign-in
pub async fn authenticate(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let payload = state.authenticate_handler().handle(&ctx).await?;
    Ok(ok(payload))
}

/// GET /api/v1/xumm/payload/:uuid - Where a sign-in stands
pub async fn get_signin_payload(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    let status = state
        .get_signin_payload_handler()
        .handle(GetSignInPayloadQuery { uuid }, &ctx)
        .await?;
    Ok(ok(status))
}

/// POST /api/v1/xumm/webhook - Signer completion callback
///
/// Takes the raw body so a malformed callback is reported through the
/// handler's own error path rather than as an extractor rejection.
pub async fn signin_webhook(
    State(state): State<AppState>,
    ctx: RequestContext,
    body: Bytes,
) -> Result<Response, ApiError> {
    let result = state
        .signin_webhook_handler()
        .handle(
            HandleSignInWebhookCommand {
                payload: body.to_vec(),
            },
            &ctx,
        )
        .await?;
    Ok(ok(WebhookAck::from(result)))
}
