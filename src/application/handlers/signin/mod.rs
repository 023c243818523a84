//! Sign-in handlers.
//!
//! `Authenticate` opens a challenge with the signer, `GetSignInPayload`
//! reads its status, and `HandleSignInWebhook` turns the signer's callback
//! into an authentication event.

mod authenticate;
mod get_signin_payload;
mod handle_signin_webhook;

pub use authenticate::AuthenticateHandler;
pub use get_signin_payload::{GetSignInPayloadHandler, GetSignInPayloadQuery};
pub use handle_signin_webhook::{
    HandleSignInWebhookCommand, HandleSignInWebhookHandler, HandleSignInWebhookResult,
};
