//! Repository for the `movies` table.

use marquee_core::types::DbId;
use sqlx::SqlitePool;

use marquee_core::models::movie::{Movie, NewMovie};

/// Column list for `movies` queries.
///
/// Data columns are read through `CAST(.. AS TEXT)` so a table created with
/// INTEGER `year`/`rating`/`duration` columns, where SQLite stores numeric
/// text as integers, still decodes into text fields.
const COLUMNS: &str = "id, \
    CAST(title AS TEXT) AS title, \
    CAST(director AS TEXT) AS director, \
    CAST(genre AS TEXT) AS genre, \
    CAST(year AS TEXT) AS year, \
    CAST(rating AS TEXT) AS rating, \
    CAST(duration AS TEXT) AS duration";

const INSERT: &str = "\
    INSERT INTO movies (title, director, genre, year, rating, duration) \
    VALUES (?, ?, ?, ?, ?, ?)";

/// Provides data access for movie records.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie in insertion (id) order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a movie, returning the id the store assigned.
    pub async fn create(pool: &SqlitePool, dto: &NewMovie) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(INSERT)
            .bind(&dto.title)
            .bind(&dto.director)
            .bind(&dto.genre)
            .bind(&dto.year)
            .bind(&dto.rating)
            .bind(&dto.duration)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrite every non-id field of a movie.
    ///
    /// Returns the number of rows touched; `0` for an unknown id.
    pub async fn update(pool: &SqlitePool, id: DbId, dto: &NewMovie) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET \
                 title = ?, director = ?, genre = ?, \
                 year = ?, rating = ?, duration = ? \
             WHERE id = ?",
        )
        .bind(&dto.title)
        .bind(&dto.director)
        .bind(&dto.genre)
        .bind(&dto.year)
        .bind(&dto.rating)
        .bind(&dto.duration)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a movie by ID. Returns the number of rows removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every movie. The id counter is not reset.
    pub async fn delete_all(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Replace the whole collection with `movies`, in order.
    ///
    /// The delete and every insert share one transaction: the first failing
    /// insert rolls the collection back to its previous contents. Returns the
    /// freshly assigned ids in input order once the transaction has committed.
    pub async fn replace_all(
        pool: &SqlitePool,
        movies: &[NewMovie],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM movies")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let mut ids = Vec::with_capacity(movies.len());
        for dto in movies {
            let result = sqlx::query(INSERT)
                .bind(&dto.title)
                .bind(&dto.director)
                .bind(&dto.genre)
                .bind(&dto.year)
                .bind(&dto.rating)
                .bind(&dto.duration)
                .execute(&mut *tx)
                .await?;
            ids.push(result.last_insert_rowid());
        }

        tx.commit().await?;
        tracing::debug!(removed, inserted = ids.len(), "movies collection replaced");
        Ok(ids)
    }
}
