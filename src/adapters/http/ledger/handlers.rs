//! HTTP handlers for XRPL wallet endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};
use secrecy::SecretString;

use crate::adapters::http::envelope::ok;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{GetAccountInfoQuery, GetAccountQuery, SendXrpCommand};
use crate::domain::foundation::RequestContext;

use super::dto::{SendXrpRequest, WalletResponse, WALLET_SEED_HEADER};

/// GET /api/v1/xrpl/account/ - Derive a wallet from `X-Wallet-Seed`, or
/// fund a new one when the header is absent.
pub async fn get_account(
    State(state): State<AppState>,
    ctx: RequestContext,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let seed = headers
        .get(WALLET_SEED_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| SecretString::new(s.to_string()));

    let wallet = state
        .get_account_handler()
        .handle(GetAccountQuery { seed }, &ctx)
        .await?;
    Ok(ok(WalletResponse::from(wallet)))
}

/// GET /api/v1/xrpl/account/:account_id/info
pub async fn get_account_info(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(account_id): Path<String>,
) -> Result<Response, ApiError> {
    let info = state
        .get_account_info_handler()
        .handle(GetAccountInfoQuery { account_id }, &ctx)
        .await?;
    Ok(ok(info))
}

/// POST /api/v1/xrpl/payment - Send XRP and wait for validation
pub async fn send_xrp(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<SendXrpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = SendXrpCommand {
        seed: SecretString::new(req.seed),
        amount: req.amount,
        destination: req.destination,
    };

    let outcome = state.send_xrp_handler().handle(cmd, &ctx).await?;
    Ok(ok(outcome))
}
