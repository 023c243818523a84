//! Ledger wallet values.
//!
//! Nothing here is persisted by this service. Accounts and payments live on
//! the ledger and are only described here.

mod account;
mod payment;

pub use account::{AccountInfo, WalletAccount};
pub use payment::{PaymentOutcome, PaymentRequest, XrpAmount, DROPS_PER_XRP};
