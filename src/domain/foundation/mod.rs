//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, request context and error types
//! shared by the user, wallet and sign-in domains.

mod errors;
mod ids;
mod request_context;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use request_context::RequestContext;
pub use timestamp::Timestamp;
