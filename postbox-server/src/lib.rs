//! postbox-server: users and per-user message queue over HTTP
//!
//! A thin routing and persistence layer. Each endpoint maps to exactly one
//! SQL statement against PostgreSQL and echoes back the affected rows as JSON.

pub mod db;
pub mod http;

pub use db::{create_pool, ensure_schema, DbError};
pub use http::{build_router, run_server, ServerConfig};
