//! XUMM platform API wire types.

use serde::{Deserialize, Serialize};

use crate::domain::signin::{PayloadRefs, PayloadStatus, SignInPayload, SignInRequest};

#[derive(Debug, Serialize)]
pub(super) struct CreatePayloadBody {
    pub txjson: TxJson,
    pub options: PayloadOptions,
}

#[derive(Debug, Serialize)]
pub(super) struct TxJson {
    #[serde(rename = "TransactionType")]
    pub transaction_type: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PayloadOptions {
    pub pathfinding_fallback: bool,
}

impl From<&SignInRequest> for CreatePayloadBody {
    fn from(request: &SignInRequest) -> Self {
        Self {
            txjson: TxJson {
                transaction_type: request.transaction_type.clone(),
            },
            options: PayloadOptions {
                pathfinding_fallback: request.pathfinding_fallback,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatedPayload {
    pub uuid: String,
    pub next: NextAction,
    pub refs: Refs,
}

#[derive(Debug, Deserialize)]
pub(super) struct NextAction {
    pub always: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Refs {
    pub qr_png: String,
    pub qr_matrix: String,
    #[serde(default)]
    pub qr_uri_quality_opts: Vec<String>,
    #[serde(default)]
    pub websocket_status: Option<String>,
}

impl From<CreatedPayload> for SignInPayload {
    fn from(created: CreatedPayload) -> Self {
        Self {
            uuid: created.uuid,
            next: created.next.always,
            refs: PayloadRefs {
                qr_png: created.refs.qr_png,
                qr_matrix: created.refs.qr_matrix,
                qr_uri_quality_opts: created.refs.qr_uri_quality_opts,
                websocket_status: created.refs.websocket_status,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PayloadDetails {
    pub meta: PayloadMeta,
    #[serde(default)]
    pub response: Option<PayloadResponse>,
    #[serde(default)]
    pub application: Option<PayloadApplication>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PayloadMeta {
    #[serde(default)]
    pub exists: bool,
    pub uuid: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub signed: bool,
    #[serde(default)]
    pub cancelled: bool,
    #[serde(default)]
    pub expired: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct PayloadResponse {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PayloadApplication {
    #[serde(default)]
    pub issued_user_token: Option<String>,
}

impl From<PayloadDetails> for PayloadStatus {
    fn from(details: PayloadDetails) -> Self {
        let (txid, account) = details
            .response
            .map(|r| (r.txid, r.account))
            .unwrap_or((None, None));
        Self {
            uuid: details.meta.uuid,
            resolved: details.meta.resolved,
            signed: details.meta.signed,
            cancelled: details.meta.cancelled,
            expired: details.meta.expired,
            txid,
            account,
            user_token: details.application.and_then(|a| a.issued_user_token),
        }
    }
}

/// Error body of the platform API.
#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorDetail {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}
