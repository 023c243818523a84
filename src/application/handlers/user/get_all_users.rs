//! GetAllUsers - Query handler listing every live user.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::store_error;

pub struct GetAllUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetAllUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, ctx: &RequestContext) -> Result<Vec<User>, DomainError> {
        self.repository
            .list()
            .await
            .map_err(store_error(ctx, "list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::users::InMemoryUserRepository;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::user::NewUser;

    #[tokio::test]
    async fn lists_live_users_only() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let kept = repo
            .insert(&NewUser::new("Ann", "ann@example.com", 30).unwrap())
            .await
            .unwrap();
        let gone = repo
            .insert(&NewUser::new("Bo", "bo@example.com", 31).unwrap())
            .await
            .unwrap();
        repo.soft_delete(&gone.id, Timestamp::now()).await.unwrap();

        let handler = GetAllUsersHandler::new(repo);
        let users = handler.handle(&RequestContext::new("t")).await.unwrap();

        assert_eq!(users, vec![kept]);
    }

    #[tokio::test]
    async fn empty_store_gives_empty_list() {
        let handler = GetAllUsersHandler::new(Arc::new(InMemoryUserRepository::new()));
        assert!(handler.handle(&RequestContext::new("t")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_internal() {
        let repo = Arc::new(InMemoryUserRepository::new());
        repo.set_unavailable(true);
        let handler = GetAllUsersHandler::new(repo);

        let err = handler.handle(&RequestContext::new("t")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
    }
}
