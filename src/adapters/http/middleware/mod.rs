//! HTTP middleware for axum.
//!
//! - `api_key` - `X-API-Key` guard for non-development environments

pub mod api_key;

pub use api_key::{require_api_key, ApiKeyGuard};
