//! Message repository
//!
//! The `message` column holds an opaque JSON payload serialized to text. The
//! repository never looks inside it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// Message record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: i64,
    pub user_id: String,
    pub message: String,
    pub queued: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Parse the stored payload text back into JSON.
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.message)
    }
}

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a message for an existing user.
    ///
    /// Fails with a foreign key violation if `user_id` is unknown.
    pub async fn insert(
        &self,
        user_id: &str,
        queued: bool,
        message: &Value,
    ) -> Result<Vec<Message>, DbError> {
        let payload = serde_json::to_string(message)?;

        let messages: Vec<Message> = sqlx::query_as(
            r#"
            INSERT INTO messages (user_id, queued, message)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message, queued, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(queued)
        .bind(payload)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    /// All messages for a user, oldest update first.
    ///
    /// `id` breaks ties between rows sharing an `updated_at`, so rows written
    /// in the same instant come back in insertion order.
    pub async fn read(&self, user_id: &str) -> Result<Vec<Message>, DbError> {
        let messages: Vec<Message> = sqlx::query_as(
            r#"
            SELECT id, user_id, message, queued, created_at, updated_at
            FROM messages
            WHERE user_id = $1
            ORDER BY updated_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    /// Messages still waiting for a consumer.
    pub async fn queued(&self, user_id: &str) -> Result<Vec<Message>, DbError> {
        let messages: Vec<Message> = sqlx::query_as(
            r#"
            SELECT id, user_id, message, queued, created_at, updated_at
            FROM messages
            WHERE queued = TRUE AND user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    /// Clear the queued flag on every message of a user and bump `updated_at`.
    ///
    /// Already-unqueued rows are touched too and appear in the result.
    pub async fn unqueue(&self, user_id: &str) -> Result<Vec<Message>, DbError> {
        let messages: Vec<Message> = sqlx::query_as(
            r#"
            UPDATE messages
            SET queued = FALSE, updated_at = NOW()
            WHERE user_id = $1
            RETURNING id, user_id, message, queued, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn delete(&self, id: i64) -> Result<Vec<Message>, DbError> {
        let messages: Vec<Message> = sqlx::query_as(
            r#"
            DELETE FROM messages
            WHERE id = $1
            RETURNING id, user_id, message, queued, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }
}
