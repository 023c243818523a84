//! FindUserByEmail - Query handler for a single user by email.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::user::{sanitize_input, User};
use crate::ports::UserRepository;

use super::store_error;

#[derive(Debug, Clone)]
pub struct FindUserByEmailQuery {
    pub email: String,
}

pub struct FindUserByEmailHandler {
    repository: Arc<dyn UserRepository>,
}

impl FindUserByEmailHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Exact match against the stored (sanitized) email.
    pub async fn handle(
        &self,
        query: FindUserByEmailQuery,
        ctx: &RequestContext,
    ) -> Result<User, DomainError> {
        let email = sanitize_input(&query.email);
        self.repository
            .find_by_email(&email)
            .await
            .map_err(store_error(ctx, "find_by_email"))?
            .ok_or_else(|| DomainError::not_found(format!("User with email {} not found", email)))
    }
}
