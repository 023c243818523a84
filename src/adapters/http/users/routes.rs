//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_user, delete_user, find_user_by_email, find_user_by_id, find_users_by_age,
    get_all_users, update_user,
};

/// Router for the `/users` endpoints. The collection answers with and
/// without a trailing slash.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(create_user).get(get_all_users))
        .route("/users", post(create_user).get(get_all_users))
        .route(
            "/users/id/:id",
            get(find_user_by_id).patch(update_user).delete(delete_user),
        )
        .route("/users/email/:email", get(find_user_by_email))
        .route("/users/age/:age", get(find_users_by_age))
}
