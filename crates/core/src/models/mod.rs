//! Wire models for the movie collection.
//!
//! `Movie` derives `sqlx::FromRow` when the `sqlx` feature is on, so the
//! store reads rows straight into it while the HTTP client stays free of
//! any database dependency.

pub mod movie;
