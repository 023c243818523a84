//! FindUsersByAge - Query handler for users of an exact age.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::store_error;

#[derive(Debug, Clone)]
pub struct FindUsersByAgeQuery {
    pub age: i32,
}

pub struct FindUsersByAgeHandler {
    repository: Arc<dyn UserRepository>,
}

impl FindUsersByAgeHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// An age no user has gives an empty list, not a miss.
    pub async fn handle(
        &self,
        query: FindUsersByAgeQuery,
        ctx: &RequestContext,
    ) -> Result<Vec<User>, DomainError> {
        self.repository
            .find_by_age(query.age)
            .await
            .map_err(store_error(ctx, "find_by_age"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::users::InMemoryUserRepository;
    use crate::domain::user::NewUser;

    #[tokio::test]
    async fn returns_every_user_with_that_age() {
        let repo = Arc::new(InMemoryUserRepository::new());
        for (name, email, age) in [
            ("Ann", "ann@example.com", 30),
            ("Bo", "bo@example.com", 30),
            ("Cy", "cy@example.com", 45),
        ] {
            repo.insert(&NewUser::new(name, email, age).unwrap())
                .await
                .unwrap();
        }
        let handler = FindUsersByAgeHandler::new(repo);

        let thirty = handler
            .handle(FindUsersByAgeQuery { age: 30 }, &RequestContext::new("t"))
            .await
            .unwrap();
        let none = handler
            .handle(FindUsersByAgeQuery { age: 77 }, &RequestContext::new("t"))
            .await
            .unwrap();

        assert_eq!(thirty.len(), 2);
        assert!(thirty.iter().all(|u| u.age == 30));
        assert!(none.is_empty());
    }
}
