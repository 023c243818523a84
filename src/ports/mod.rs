//! Ports - the interfaces between the application and external systems.
//!
//! - `UserRepository` - record store for users
//! - `QueueClient` - named message queues
//! - `LedgerClient` - wallets and payments on the ledger network
//! - `SigningClient` - sign-in challenges issued by the signing service
//!
//! Each port has its own error enum so adapters can say whether a failure
//! was a miss, a transient outage or a permanent refusal.

mod ledger_client;
mod queue_client;
mod signing_client;
mod user_repository;

pub use ledger_client::{LedgerClient, LedgerError};
pub use queue_client::{QueueClient, QueueError};
pub use signing_client::{SigningClient, SigningError};
pub use user_repository::{RepositoryError, UserRepository};
