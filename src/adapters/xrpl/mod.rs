//! XRP Ledger adapters.
//!
//! - `client` - rippled JSON-RPC plus the test-network faucet
//! - `keys` - seed decoding, key derivation and signing
//! - `codec` - binary Payment encoding and transaction ids
//! - `mock` - scripted ledger for tests

mod client;
mod codec;
mod keys;
mod mock;
mod types;

pub use client::{XrplClient, XrplConfig};
pub use mock::MockLedgerClient;
