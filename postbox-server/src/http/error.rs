//! API error type with IntoResponse
//!
//! Every failure becomes `500 {"error": "<message>"}`. Clients tell a
//! conflict from an outage only by reading the message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Statement failed: constraint violation, connection loss, ...
    #[error(transparent)]
    Database(#[from] DbError),

    /// Request could not be turned into call arguments (bad JSON body,
    /// missing field, non-integer id)
    #[error("{message}")]
    Rejection { message: String },
}

impl ApiError {
    pub fn rejection(message: impl Into<String>) -> Self {
        Self::Rejection {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => {
                tracing::error!(kind = %e.kind(), "Database error: {}", e);
            }
            Self::Rejection { message } => {
                tracing::warn!("Rejected request: {}", message);
            }
        }

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_error_is_500() {
        let err = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("database error: "));
    }

    #[tokio::test]
    async fn rejection_is_500_with_message() {
        let response = ApiError::rejection("missing field `user_id`").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "missing field `user_id`" }));
    }
}
