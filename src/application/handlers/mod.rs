//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! takes its ports at construction and the request context per call.

pub mod ledger;
pub mod queue;
pub mod signin;
pub mod user;
