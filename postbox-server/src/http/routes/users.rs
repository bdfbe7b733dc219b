//! User endpoints
//!
//! Every handler answers with the affected rows as a JSON array. An empty
//! array means no user matched; there is no 404.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathParam};
use crate::http::server::AppState;

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub user_id: String,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).create(&req.user_id).await?;
    tracing::debug!(user_id = %req.user_id, "user created");
    Ok(Json(users))
}

/// GET /users/{user_id} - fetch a user
async fn get_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).get(&user_id).await?;
    Ok(Json(users))
}

/// PUT /users/{user_id} - bump the user's updated_at
async fn touch_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).touch(&user_id).await?;
    Ok(Json(users))
}

/// DELETE /users/{user_id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).delete(&user_id).await?;
    Ok(Json(users))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(touch_user).delete(delete_user),
        )
}
