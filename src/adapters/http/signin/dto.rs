//! HTTP DTOs for sign-in endpoints.

use serde::Serialize;

use crate::application::HandleSignInWebhookResult;

/// Acknowledgment returned to the signer's webhook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookAck {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

impl From<HandleSignInWebhookResult> for WebhookAck {
    fn from(result: HandleSignInWebhookResult) -> Self {
        match result {
            HandleSignInWebhookResult::Authenticated { wallet_address } => Self {
                detail: "User authenticated successfully".to_string(),
                wallet_address: Some(wallet_address),
            },
            HandleSignInWebhookResult::NotSigned => Self {
                detail: "User did not complete sign-in successfully".to_string(),
                wallet_address: None,
            },
        }
    }
}
