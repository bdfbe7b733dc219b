//! Command implementations for postbox CLI

pub mod serve;

pub use serve::run_serve;
