//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument and issue one SQL statement
//! per call (replace is the one multi-statement exception, run in a
//! transaction).

pub mod movie_repo;

pub use movie_repo::MovieRepo;
