//! HTTP adapter for XUMM sign-in endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::WebhookAck;
pub use routes::{signin_routes, webhook_routes};
