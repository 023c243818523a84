//! Ledger gateway handlers.

mod get_account;
mod get_account_info;
mod send_xrp;

pub use get_account::{GetAccountHandler, GetAccountQuery};
pub use get_account_info::{GetAccountInfoHandler, GetAccountInfoQuery};
pub use send_xrp::{SendXrpCommand, SendXrpHandler};
