//! PublishAuthenticationMessage - Command handler that emits an
//! authentication event onto the auth queue.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::signin::{AuthenticationEvent, AUTH_QUEUE_NAME};
use crate::ports::QueueClient;

#[derive(Debug, Clone)]
pub struct PublishAuthenticationMessageCommand {
    pub wallet_address: String,
    pub user_token: Option<String>,
}

/// Single attempt, no retry. Queue failures come back as `Upstream`.
pub struct PublishAuthenticationMessageHandler {
    queue: Arc<dyn QueueClient>,
}

impl PublishAuthenticationMessageHandler {
    pub fn new(queue: Arc<dyn QueueClient>) -> Self {
        Self { queue }
    }

    pub async fn handle(
        &self,
        cmd: PublishAuthenticationMessageCommand,
        ctx: &RequestContext,
    ) -> Result<AuthenticationEvent, DomainError> {
        let event = AuthenticationEvent::authenticated(cmd.wallet_address, cmd.user_token);
        let body = event
            .to_json()
            .map_err(|e| DomainError::internal(format!("Failed to encode event: {}", e)))?;

        self.queue
            .publish(AUTH_QUEUE_NAME, &body)
            .await
            .map_err(|e| {
                tracing::error!(
                    request_id = %ctx,
                    queue = AUTH_QUEUE_NAME,
                    error = %e,
                    transient = e.is_transient(),
                    "failed to publish authentication event"
                );
                DomainError::from(e)
            })?;

        tracing::info!(
            request_id = %ctx,
            queue = AUTH_QUEUE_NAME,
            wallet_address = %event.user_wallet_address,
            "authentication event published"
        );
        Ok(event)
    }
}
