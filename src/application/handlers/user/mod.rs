//! User application handlers.
//!
//! Command and query handlers for user records.

mod create_user;
mod delete_user;
mod find_user_by_email;
mod find_user_by_id;
mod find_users_by_age;
mod get_all_users;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use find_user_by_email::{FindUserByEmailHandler, FindUserByEmailQuery};
pub use find_user_by_id::{FindUserByIdHandler, FindUserByIdQuery};
pub use find_users_by_age::{FindUsersByAgeHandler, FindUsersByAgeQuery};
pub use get_all_users::GetAllUsersHandler;
pub use update_user::{UpdateUserCommand, UpdateUserHandler};

use crate::domain::foundation::{DomainError, RequestContext, UserId};
use crate::ports::RepositoryError;

/// Logs a store failure with the request id, then converts it.
fn store_error<'a>(
    ctx: &'a RequestContext,
    operation: &'static str,
) -> impl FnOnce(RepositoryError) -> DomainError + 'a {
    move |err| {
        match &err {
            RepositoryError::Duplicate { email } => {
                tracing::info!(request_id = %ctx, %email, operation, "duplicate email");
            }
            _ => {
                tracing::error!(request_id = %ctx, error = %err, operation, "record store failure");
            }
        }
        DomainError::from(err)
    }
}

/// Parses a path id. Anything that is not a UUID cannot name a stored
/// record, so it is reported as a miss.
fn parse_user_id(raw: &str) -> Result<UserId, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::not_found(format!("User with id {} not found", raw)))
}
