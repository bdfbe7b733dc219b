//! Table definitions for users and messages
//!
//! Bootstrap only: tables are created if missing, never altered.

use sqlx::PgPool;

use super::DbError;

/// Users keyed by an externally supplied, unique `user_id`.
pub const USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        user_id VARCHAR(255) NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Messages owned by a user. No ON DELETE action: a user with messages
/// cannot be deleted.
pub const MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        user_id VARCHAR(255) NOT NULL REFERENCES users(user_id),
        message TEXT NOT NULL,
        queued BOOLEAN NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// Create both tables if they do not exist yet.
///
/// Users first, since the messages foreign key points at it.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("ensuring postbox schema");

    for ddl in [USERS_TABLE, MESSAGES_TABLE] {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
