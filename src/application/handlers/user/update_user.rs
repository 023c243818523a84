//! UpdateUser - Command handler for partial user updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext, Timestamp};
use crate::domain::user::{User, UserChanges};
use crate::ports::UserRepository;

use super::{parse_user_id, store_error};

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

pub struct UpdateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateUserCommand,
        ctx: &RequestContext,
    ) -> Result<User, DomainError> {
        let id = parse_user_id(&cmd.id)?;
        let changes = UserChanges::new(cmd.name.as_deref(), cmd.email.as_deref(), cmd.age)?;

        let user = self
            .repository
            .update(&id, &changes, Timestamp::now())
            .await
            .map_err(store_error(ctx, "update"))?
            .ok_or_else(|| DomainError::not_found(format!("User with id {} not found", id)))?;

        tracing::info!(request_id = %ctx, user_id = %user.id, "user updated");
        Ok(user)
    }
}
