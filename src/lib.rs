//! XRPL User Service
//!
//! User management over PostgreSQL, XRP Ledger wallet operations, and XUMM
//! sign-in whose completion is relayed to a message queue.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
