//! UserRepository port - the record store for users.
//!
//! Every read excludes soft-deleted records. Implementations enforce email
//! uniqueness among live records themselves and report a conflict as
//! [`RepositoryError::Duplicate`], so concurrent inserts cannot both win.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::{NewUser, User, UserChanges};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a record and returns it with its new identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Every live record, oldest first.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_age(&self, age: i32) -> Result<Vec<User>, RepositoryError>;

    /// Applies `changes` to a live record and returns the result, or `None`
    /// if there is no live record with that id.
    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
        now: Timestamp,
    ) -> Result<Option<User>, RepositoryError>;

    /// Marks a live record deleted. Returns false if none matched.
    async fn soft_delete(&self, id: &UserId, now: Timestamp) -> Result<bool, RepositoryError>;

    /// Round-trips to the store.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Record store failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Another live record already holds this email.
    #[error("email already in use: {email}")]
    Duplicate { email: String },

    /// Store could not be reached or timed out.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be decoded into a user.
    #[error("corrupt user record: {0}")]
    Corrupt(String),

    #[error("record store query failed: {0}")]
    Query(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate { email } => DomainError::duplicate("email", email),
            RepositoryError::Unavailable(_)
            | RepositoryError::Query(_)
            | RepositoryError::Corrupt(_) => DomainError::internal(err.to_string()),
        }
    }
}
