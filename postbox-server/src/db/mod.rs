//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One statement per operation, no multi-statement transactions
//! - Every write uses RETURNING so callers see generated ids and timestamps
//! - Rely on DB constraints (UNIQUE, FOREIGN KEY) - no check-then-insert

pub mod error;
pub mod pool;
pub mod repos;
pub mod schema;

pub use error::{DbError, DbErrorKind};
pub use pool::create_pool;
pub use repos::*;
pub use schema::ensure_schema;
