//! XUMM signing service adapters.
//!
//! - `client` - XUMM platform REST API
//! - `mock` - in-process signer for tests

mod client;
mod mock;
mod types;

pub use client::{XummClient, XummConfig};
pub use mock::MockSigningClient;
