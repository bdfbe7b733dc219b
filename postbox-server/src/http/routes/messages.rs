//! Message endpoints
//!
//! `GET /messages/{key}` reads by user id while `DELETE /messages/{key}`
//! deletes by row id. Both live on one route because the router does not
//! allow two parameter names in the same position.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::db::{Message, MessageRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathParam};
use crate::http::server::AppState;

/// Insert message request. `message` may be any JSON value.
#[derive(Debug, Deserialize)]
pub struct InsertMessageRequest {
    pub user_id: String,
    pub queued: bool,
    pub message: Value,
}

/// POST /messages - store a message for an existing user
async fn insert_message(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<InsertMessageRequest>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepo::new(&state.pool)
        .insert(&req.user_id, req.queued, &req.message)
        .await?;
    tracing::debug!(user_id = %req.user_id, queued = req.queued, "message stored");
    Ok(Json(messages))
}

/// GET /messages/{user_id} - all messages of a user, oldest update first
async fn read_messages(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).read(&user_id).await?;
    Ok(Json(messages))
}

/// GET /messages/{user_id}/queued - messages still queued
async fn queued_messages(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).queued(&user_id).await?;
    Ok(Json(messages))
}

/// PUT /messages/{user_id}/unqueue - unqueue every message of a user
async fn unqueue_messages(
    State(state): State<Arc<AppState>>,
    PathParam(user_id): PathParam<String>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).unqueue(&user_id).await?;
    tracing::debug!(user_id = %user_id, count = messages.len(), "messages unqueued");
    Ok(Json(messages))
}

/// DELETE /messages/{id} - delete one message by primary key
async fn delete_message(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = MessageRepo::new(&state.pool).delete(id).await?;
    Ok(Json(messages))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", post(insert_message))
        .route("/messages/{key}", get(read_messages).delete(delete_message))
        .route("/messages/{key}/queued", get(queued_messages))
        .route("/messages/{key}/unqueue", put(unqueue_messages))
}
