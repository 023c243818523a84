//! Sign-in through the wallet signing service.
//!
//! A sign-in starts with a [`SignInRequest`] that the signer turns into a
//! [`SignInPayload`]. The signer later reports the outcome through a webhook,
//! parsed into a [`SignInCallback`]. A signed callback yields one
//! [`AuthenticationEvent`] for the auth queue.

mod callback;
mod event;
mod payload;

pub use callback::{CallbackParseError, SignInCallback};
pub use event::{AuthenticationEvent, AuthenticationStatus, AUTH_QUEUE_NAME};
pub use payload::{PayloadRefs, PayloadStatus, SignInPayload, SignInRequest};
