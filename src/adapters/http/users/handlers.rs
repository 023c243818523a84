//! HTTP handlers for user endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};

use crate::adapters::http::envelope::ok;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{
    CreateUserCommand, DeleteUserCommand, FindUserByEmailQuery, FindUserByIdQuery,
    FindUsersByAgeQuery, UpdateUserCommand,
};
use crate::domain::foundation::{DomainError, RequestContext};

use super::dto::{user_list, CreateUserRequest, UpdateUserRequest, UserResponse};

/// POST /api/v1/users/ - Create a user
pub async fn create_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = CreateUserCommand {
        name: req.name,
        email: req.email,
        age: req.age,
    };

    let user = state.create_user_handler().handle(cmd, &ctx).await?;
    Ok(ok(UserResponse::from(user)))
}

/// GET /api/v1/users/ - List users
pub async fn get_all_users(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<Response, ApiError> {
    let users = state.get_all_users_handler().handle(&ctx).await?;
    Ok(ok(user_list(users)))
}

/// GET /api/v1/users/id/:id
pub async fn find_user_by_id(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let user = state
        .find_user_by_id_handler()
        .handle(FindUserByIdQuery { id }, &ctx)
        .await?;
    Ok(ok(UserResponse::from(user)))
}

/// GET /api/v1/users/email/:email
pub async fn find_user_by_email(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(email): Path<String>,
) -> Result<Response, ApiError> {
    let user = state
        .find_user_by_email_handler()
        .handle(FindUserByEmailQuery { email }, &ctx)
        .await?;
    Ok(ok(UserResponse::from(user)))
}

/// GET /api/v1/users/age/:age
pub async fn find_users_by_age(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(age): Path<String>,
) -> Result<Response, ApiError> {
    let age = age
        .trim()
        .parse::<i32>()
        .map_err(|_| DomainError::validation("age", "must be a whole number"))?;

    let users = state
        .find_users_by_age_handler()
        .handle(FindUsersByAgeQuery { age }, &ctx)
        .await?;
    Ok(ok(user_list(users)))
}

/// PATCH /api/v1/users/id/:id - Partial update
pub async fn update_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = UpdateUserCommand {
        id,
        name: req.name,
        email: req.email,
        age: req.age,
    };

    let user = state.update_user_handler().handle(cmd, &ctx).await?;
    Ok(ok(UserResponse::from(user)))
}

/// DELETE /api/v1/users/id/:id - Soft delete
pub async fn delete_user(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    state
        .delete_user_handler()
        .handle(DeleteUserCommand { id: id.clone() }, &ctx)
        .await?;
    Ok(ok(serde_json::json!({ "id": id, "deleted": true })))
}
