//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Exactly one SQL statement per operation
//! - Writes return the affected rows via RETURNING
//! - An empty Vec means nothing matched; it is not an error

pub mod messages;
pub mod users;

pub use messages::{Message, MessageRepo};
pub use users::{User, UserRepo};
