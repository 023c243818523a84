//! Webhook callback from the signer.

use serde::Deserialize;
use thiserror::Error;

/// Why a callback body could not be understood.
#[derive(Debug, Error)]
pub enum CallbackParseError {
    #[error("callback body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A signed callback without a txid names no wallet, so publishing it
    /// would hand consumers an auth event with no address to trust.
    #[error("signed callback carries no txid")]
    MissingTxid,
}

/// Outcome reported by one webhook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInCallback {
    /// The user signed. `wallet_address` carries the signer's txid.
    Signed {
        payload_uuid: Option<String>,
        wallet_address: String,
        user_token: Option<String>,
    },
    /// The user rejected, or the flag was missing.
    NotSigned { payload_uuid: Option<String> },
}

#[derive(Debug, Deserialize)]
struct CallbackBody {
    #[serde(rename = "payloadResponse", default)]
    payload_response: Option<PayloadResponse>,
    #[serde(rename = "userToken", default)]
    user_token: Option<UserToken>,
}

#[derive(Debug, Deserialize)]
struct PayloadResponse {
    #[serde(default)]
    signed: Option<bool>,
    #[serde(default)]
    txid: Option<String>,
    #[serde(default)]
    payload_uuidv4: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserToken {
    #[serde(default)]
    user_token: Option<String>,
}

impl SignInCallback {
    /// Parses a raw callback body.
    pub fn from_slice(body: &[u8]) -> Result<Self, CallbackParseError> {
        let body: CallbackBody = serde_json::from_slice(body)?;
        let (signed, txid, payload_uuid) = match body.payload_response {
            Some(r) => (r.signed.unwrap_or(false), r.txid, r.payload_uuidv4),
            None => (false, None, None),
        };

        if !signed {
            return Ok(SignInCallback::NotSigned { payload_uuid });
        }

        let wallet_address = txid
            .filter(|t| !t.is_empty())
            .ok_or(CallbackParseError::MissingTxid)?;
        let user_token = body.user_token.and_then(|t| t.user_token);

        Ok(SignInCallback::Signed {
            payload_uuid,
            wallet_address,
            user_token,
        })
    }

    pub fn payload_uuid(&self) -> Option<&str> {
        match self {
            SignInCallback::Signed { payload_uuid, .. }
            | SignInCallback::NotSigned { payload_uuid } => payload_uuid.as_deref(),
        }
    }
}
