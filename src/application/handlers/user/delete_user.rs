//! DeleteUser - Command handler for soft-deleting a user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext, Timestamp};
use crate::ports::UserRepository;

use super::{parse_user_id, store_error};

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub id: String,
}

/// Marks the record deleted. It stays in the store but no lookup sees it.
pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteUserCommand, ctx: &RequestContext) -> Result<(), DomainError> {
        let id = parse_user_id(&cmd.id)?;
        let deleted = self
            .repository
            .soft_delete(&id, Timestamp::now())
            .await
            .map_err(store_error(ctx, "soft_delete"))?;

        if !deleted {
            return Err(DomainError::not_found(format!("User with id {} not found", id)));
        }
        tracing::info!(request_id = %ctx, user_id = %id, "user deleted");
        Ok(())
    }
}
