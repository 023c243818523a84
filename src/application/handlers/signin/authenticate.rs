//! Authenticate - Command handler that opens a sign-in challenge.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::signin::{SignInPayload, SignInRequest};
use crate::ports::SigningClient;

/// Asks the signer for a fresh sign-in payload. One attempt; a signer
/// failure is returned to the caller as `Upstream`.
pub struct AuthenticateHandler {
    signer: Arc<dyn SigningClient>,
}

impl AuthenticateHandler {
    pub fn new(signer: Arc<dyn SigningClient>) -> Self {
        Self { signer }
    }

    pub async fn handle(&self, ctx: &RequestContext) -> Result<SignInPayload, DomainError> {
        let payload = self
            .signer
            .create_payload(&SignInRequest::sign_in())
            .await
            .map_err(|e| {
                tracing::error!(request_id = %ctx, error = %e, "failed to create sign-in payload");
                DomainError::upstream(e.to_string())
            })?;

        tracing::info!(request_id = %ctx, payload_uuid = %payload.uuid, "sign-in payload created");
        Ok(payload)
    }
}
