//! In-Memory User Repository
//!
//! Keeps users in a vector behind one lock, so the uniqueness check and the
//! insert happen atomically. Useful for testing and local development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::{NewUser, User, UserChanges};
use crate::ports::{RepositoryError, UserRepository};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with `Unavailable` until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored records, including soft-deleted ones.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

fn email_taken(users: &[User], email: &str, except: Option<&UserId>) -> bool {
    users
        .iter()
        .any(|u| u.is_active() && u.email == email && Some(&u.id) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if email_taken(&users, user.email(), None) {
            return Err(RepositoryError::Duplicate {
                email: user.email().to_string(),
            });
        }
        let stored = user.clone().into_user(UserId::from_uuid(Uuid::new_v4()));
        users.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| u.is_active()).cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.is_active() && &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.is_active() && u.email == email)
            .cloned())
    }

    async fn find_by_age(&self, age: i32) -> Result<Vec<User>, RepositoryError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.is_active() && u.age == age)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
        now: Timestamp,
    ) -> Result<Option<User>, RepositoryError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        if let Some(email) = changes.email() {
            if email_taken(&users, email, Some(id)) {
                return Err(RepositoryError::Duplicate {
                    email: email.to_string(),
                });
            }
        }
        let Some(user) = users.iter_mut().find(|u| u.is_active() && &u.id == id) else {
            return Ok(None);
        };
        changes.apply_to(user, now);
        Ok(Some(user.clone()))
    }

    async fn soft_delete(&self, id: &UserId, now: Timestamp) -> Result<bool, RepositoryError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.is_active() && &u.id == id) {
            Some(user) => {
                user.deleted = Some(now);
                user.modified = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.check_available()
    }
}
