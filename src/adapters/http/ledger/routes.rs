//! HTTP routes for XRPL wallet endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_account, get_account_info, send_xrp};

pub fn ledger_routes() -> Router<AppState> {
    Router::new()
        .route("/xrpl/account/", get(get_account))
        .route("/xrpl/account", get(get_account))
        .route("/xrpl/account/:account_id/info", get(get_account_info))
        .route("/xrpl/payment", post(send_xrp))
}
