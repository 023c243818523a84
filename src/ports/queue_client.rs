//! QueueClient port - named message queues.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Declares `queue` if needed and appends `body`.
    async fn publish(&self, queue: &str, body: &str) -> Result<(), QueueError>;

    /// Drops every pending message and returns how many there were.
    async fn purge(&self, queue: &str) -> Result<u64, QueueError>;

    /// Removes the queue and its messages.
    async fn delete(&self, queue: &str) -> Result<(), QueueError>;

    async fn ping(&self) -> Result<(), QueueError>;
}

#[derive(Debug, Error)]
pub enum QueueError {
    /// The broker could not be reached.
    #[error("queue connection failed: {0}")]
    Connection(String),

    /// The command did not finish within the configured timeout.
    #[error("queue operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The broker refused the command.
    #[error("queue command failed: {0}")]
    Command(String),
}

impl QueueError {
    /// Whether retrying later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, QueueError::Connection(_) | QueueError::Timeout(_))
    }
}

impl From<QueueError> for DomainError {
    fn from(err: QueueError) -> Self {
        DomainError::upstream(err.to_string())
    }
}
