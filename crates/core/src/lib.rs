//! Shared domain types for the movie collection service and its client.

pub mod error;
pub mod models;
pub mod movie;
pub mod types;
