//! HandleSignInWebhook - Command handler for the signer's completion
//! callback.

use std::sync::Arc;

use crate::application::handlers::queue::{
    PublishAuthenticationMessageCommand, PublishAuthenticationMessageHandler,
};
use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::signin::SignInCallback;
use crate::ports::QueueClient;

/// Command to handle one webhook call.
#[derive(Debug, Clone)]
pub struct HandleSignInWebhookCommand {
    /// Raw webhook body.
    pub payload: Vec<u8>,
}

/// What the callback reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleSignInWebhookResult {
    /// User signed; one authentication event was published.
    Authenticated { wallet_address: String },
    /// User did not sign; nothing was published.
    NotSigned,
}

/// Handler for sign-in callbacks.
///
/// Holds no per-payload state. Every signed callback publishes, so a
/// replayed callback publishes again.
pub struct HandleSignInWebhookHandler {
    publisher: PublishAuthenticationMessageHandler,
}

impl HandleSignInWebhookHandler {
    pub fn new(queue: Arc<dyn QueueClient>) -> Self {
        Self {
            publisher: PublishAuthenticationMessageHandler::new(queue),
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleSignInWebhookCommand,
        ctx: &RequestContext,
    ) -> Result<HandleSignInWebhookResult, DomainError> {
        tracing::info!(request_id = %ctx, "received sign-in callback");

        // 1. Parse the callback
        let callback = SignInCallback::from_slice(&cmd.payload).map_err(|e| {
            tracing::error!(request_id = %ctx, error = %e, "unreadable sign-in callback");
            DomainError::internal(format!("Failed to parse sign-in callback: {}", e))
        })?;

        // 2. Branch on the signed flag
        match callback {
            SignInCallback::Signed {
                payload_uuid,
                wallet_address,
                user_token,
            } => {
                self.publisher
                    .handle(
                        PublishAuthenticationMessageCommand {
                            wallet_address: wallet_address.clone(),
                            user_token,
                        },
                        ctx,
                    )
                    .await
                    .map_err(|e| DomainError::internal(e.message))?;

                tracing::info!(
                    request_id = %ctx,
                    payload_uuid = payload_uuid.as_deref().unwrap_or("-"),
                    %wallet_address,
                    "user signed in"
                );
                Ok(HandleSignInWebhookResult::Authenticated { wallet_address })
            }
            SignInCallback::NotSigned { payload_uuid } => {
                tracing::warn!(
                    request_id = %ctx,
                    payload_uuid = payload_uuid.as_deref().unwrap_or("-"),
                    "user did not complete sign-in"
                );
                Ok(HandleSignInWebhookResult::NotSigned)
            }
        }
    }
}
