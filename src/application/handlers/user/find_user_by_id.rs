//! FindUserById - Query handler for a single user by identifier.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::{parse_user_id, store_error};

#[derive(Debug, Clone)]
pub struct FindUserByIdQuery {
    /// Identifier as given by the caller, not yet parsed.
    pub id: String,
}

pub struct FindUserByIdHandler {
    repository: Arc<dyn UserRepository>,
}

impl FindUserByIdHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: FindUserByIdQuery,
        ctx: &RequestContext,
    ) -> Result<User, DomainError> {
        let id = parse_user_id(&query.id)?;
        self.repository
            .find_by_id(&id)
            .await
            .map_err(store_error(ctx, "find_by_id"))?
            .ok_or_else(|| DomainError::not_found(format!("User with id {} not found", id)))
    }
}
