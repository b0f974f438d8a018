//! Persistence layer for the `movies` relation.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// The only relation. Every descriptive column is TEXT so the `"N/A"`
/// placeholder round-trips unchanged; `AUTOINCREMENT` keeps ids monotonic
/// across deletes.
const CREATE_MOVIES_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS movies ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        title TEXT, \
        director TEXT, \
        genre TEXT, \
        year TEXT, \
        rating TEXT, \
        duration TEXT \
    )";

/// Create a connection pool from a database URL, creating the file if needed.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Each SQLite in-memory connection is its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn connect_in_memory() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `movies` table if it does not exist yet. Safe to call on
/// every startup.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MOVIES_TABLE).execute(pool).await?;
    tracing::debug!("movies table ensured");
    Ok(())
}
