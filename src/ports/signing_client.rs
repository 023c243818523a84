//! SigningClient port - the third-party sign-in service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::DomainError;
use crate::domain::signin::{PayloadStatus, SignInPayload, SignInRequest};

#[async_trait]
pub trait SigningClient: Send + Sync {
    async fn create_payload(&self, request: &SignInRequest) -> Result<SignInPayload, SigningError>;

    async fn get_payload(&self, uuid: &str) -> Result<PayloadStatus, SigningError>;
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("payload not found: {0}")]
    NotFound(String),

    /// Credentials were refused.
    #[error("signing service rejected credentials")]
    Unauthorized,

    #[error("signing service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("signing service unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected signing service response: {0}")]
    Protocol(String),
}

impl From<SigningError> for DomainError {
    fn from(err: SigningError) -> Self {
        match err {
            SigningError::NotFound(_) => DomainError::not_found(err.to_string()),
            _ => DomainError::upstream(err.to_string()),
        }
    }
}
