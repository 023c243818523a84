//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, request context, errors)
//! - `user` - User records and their validation rules
//! - `wallet` - Ledger accounts and payments
//! - `signin` - Wallet sign-in challenges, callbacks and authentication events

pub mod foundation;
pub mod signin;
pub mod user;
pub mod wallet;
