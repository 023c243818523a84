//! User record store adapters.
//!
//! - `postgres` - production store on PostgreSQL
//! - `in_memory` - same semantics in process, for tests and local runs

mod in_memory;
mod postgres;

pub use in_memory::InMemoryUserRepository;
pub use postgres::{connect_pool, run_migrations, PostgresUserRepository};
