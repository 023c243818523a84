//! HTTP adapter for XRPL wallet endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{SendXrpRequest, WalletResponse};
pub use routes::ledger_routes;
