//! Adapters - Implementations of port interfaces.
//!
//! - `users` - record store (PostgreSQL, in-memory)
//! - `queue` - message queue (Redis lists, in-memory)
//! - `xrpl` - XRP Ledger JSON-RPC and faucet
//! - `xumm` - XUMM signing platform
//! - `http` - axum REST surface

pub mod http;
pub mod queue;
pub mod users;
pub mod xrpl;
pub mod xumm;

pub use queue::{InMemoryQueueClient, RedisQueueClient};
pub use users::{InMemoryUserRepository, PostgresUserRepository};
pub use xrpl::{MockLedgerClient, XrplClient, XrplConfig};
pub use xumm::{MockSigningClient, XummClient, XummConfig};
