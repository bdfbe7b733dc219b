//! User repository
//!
//! Users are keyed by their external `user_id`; the identity `id` is only
//! echoed back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user. Fails with a unique violation if `user_id` exists.
    pub async fn create(&self, user_id: &str) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            INSERT INTO users (user_id)
            VALUES ($1)
            RETURNING id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get(&self, user_id: &str) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, user_id, created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Bump `updated_at` to now.
    pub async fn touch(&self, user_id: &str) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            UPDATE users
            SET updated_at = NOW()
            WHERE user_id = $1
            RETURNING id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Delete a user. Fails with a foreign key violation while the user
    /// still owns messages.
    pub async fn delete(&self, user_id: &str) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            DELETE FROM users
            WHERE user_id = $1
            RETURNING id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }
}
