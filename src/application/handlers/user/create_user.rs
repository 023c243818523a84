//! CreateUser - Command handler for registering a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::user::{NewUser, User};
use crate::ports::UserRepository;

use super::store_error;

/// Command to create a user. Fields arrive raw and are sanitized here.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Handler for creating users.
///
/// Looks the email up first so the common duplicate case fails fast with a
/// named error. The store's own uniqueness check covers concurrent creates
/// that both pass the lookup.
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateUserCommand,
        ctx: &RequestContext,
    ) -> Result<User, DomainError> {
        // 1. Sanitize and validate
        let new_user = NewUser::new(&cmd.name, &cmd.email, cmd.age).map_err(|e| {
            tracing::info!(request_id = %ctx, details = ?e.details, "user input rejected");
            e
        })?;

        // 2. Fast duplicate check
        if self
            .repository
            .find_by_email(new_user.email())
            .await
            .map_err(store_error(ctx, "find_by_email"))?
            .is_some()
        {
            tracing::info!(request_id = %ctx, email = %new_user.email(), "duplicate email");
            return Err(DomainError::duplicate("email", new_user.email()));
        }

        // 3. Insert; the store rejects a duplicate that slipped past step 2
        let user = self
            .repository
            .insert(&new_user)
            .await
            .map_err(store_error(ctx, "insert"))?;

        tracing::info!(request_id = %ctx, user_id = %user.id, "user created");
        Ok(user)
    }
}
