//! Database error type shared by all repositories

use std::fmt;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("message payload could not be serialized: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Coarse classification of a [`DbError`], used for logging only.
///
/// The HTTP layer maps every kind to the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbErrorKind {
    /// Duplicate `users.user_id`
    UniqueViolation,
    /// Message for an unknown user, or deleting a user that still has messages
    ForeignKeyViolation,
    /// Pool or transport failure
    Connection,
    Other,
}

impl DbErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UniqueViolation => "unique_violation",
            Self::ForeignKeyViolation => "foreign_key_violation",
            Self::Connection => "connection",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DbErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DbError {
    pub fn kind(&self) -> DbErrorKind {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => match e.kind() {
                sqlx::error::ErrorKind::UniqueViolation => DbErrorKind::UniqueViolation,
                sqlx::error::ErrorKind::ForeignKeyViolation => DbErrorKind::ForeignKeyViolation,
                _ => DbErrorKind::Other,
            },
            Self::Sqlx(
                sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed,
            ) => DbErrorKind::Connection,
            _ => DbErrorKind::Other,
        }
    }
}
