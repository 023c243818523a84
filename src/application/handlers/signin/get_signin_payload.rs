//! GetSignInPayload - Query handler for a challenge's current status.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::signin::PayloadStatus;
use crate::ports::SigningClient;

#[derive(Debug, Clone)]
pub struct GetSignInPayloadQuery {
    pub uuid: String,
}

pub struct GetSignInPayloadHandler {
    signer: Arc<dyn SigningClient>,
}

impl GetSignInPayloadHandler {
    pub fn new(signer: Arc<dyn SigningClient>) -> Self {
        Self { signer }
    }

    pub async fn handle(
        &self,
        query: GetSignInPayloadQuery,
        ctx: &RequestContext,
    ) -> Result<PayloadStatus, DomainError> {
        let uuid = query.uuid.trim();
        if uuid.is_empty() {
            return Err(DomainError::validation("uuid", "Payload uuid cannot be empty"));
        }

        self.signer.get_payload(uuid).await.map_err(|e| {
            tracing::warn!(request_id = %ctx, payload_uuid = %uuid, error = %e, "payload lookup failed");
            DomainError::from(e)
        })
    }
}
