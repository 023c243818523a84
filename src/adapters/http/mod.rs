//! HTTP adapter - the axum surface under `/api/v1`.
//!
//! Each area has its own dto/handlers/routes split. Shared pieces:
//! - `envelope` - `{status, data, message, error}` wrapper
//! - `error` - domain error to status mapping
//! - `context` - `RequestContext` extractor
//! - `middleware` - API key guard

mod context;
pub mod envelope;
pub mod error;
pub mod health;
pub mod ledger;
pub mod middleware;
mod router;
pub mod signin;
mod state;
pub mod users;

pub use context::REQUEST_ID_HEADER;
pub use envelope::{Envelope, EnvelopeStatus, ErrorBody, SUCCESS_MESSAGE};
pub use error::ApiError;
pub use middleware::ApiKeyGuard;
pub use router::{build_router, RouterOptions, API_PREFIX};
pub use state::AppState;
