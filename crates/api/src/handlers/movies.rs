//! Handlers for the `/api` movie collection.
//!
//! Every handler is a thin pass-through to [`MovieRepo`]. Unknown ids are
//! not errors: lookups answer `null`, and updates or deletes report success
//! whether or not a row matched.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use marquee_core::movie::{
    ApiReply, CREATE_ENTRY_OK, DELETE_COLLECTION_OK, DELETE_ITEM_OK, REPLACE_COLLECTION_OK,
    UPDATE_ITEM_OK,
};
use marquee_core::types::DbId;
use marquee_core::models::movie::{Movie, NewMovie};
use marquee_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// GET /api
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    tracing::info!(count = movies.len(), "Movies listed");
    Ok(Json(movies))
}

/// PUT /api
///
/// Delete every record, then insert the body's records in order. Responds
/// only after the whole replace has committed.
pub async fn replace_collection(
    State(state): State<AppState>,
    payload: Result<Json<Vec<NewMovie>>, JsonRejection>,
) -> AppResult<Json<ApiReply>> {
    let Json(movies) = payload?;
    let ids = MovieRepo::replace_all(&state.pool, &movies).await?;
    tracing::info!(inserted = ids.len(), "Movie collection replaced");
    Ok(Json(ApiReply::status(REPLACE_COLLECTION_OK)))
}

/// POST /api
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<Json<ApiReply>> {
    let Json(input) = payload?;
    let id = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = id, "Movie created");
    Ok(Json(ApiReply::status(CREATE_ENTRY_OK)))
}

/// DELETE /api
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<ApiReply>> {
    let removed = MovieRepo::delete_all(&state.pool).await?;
    tracing::info!(removed, "Movie collection deleted");
    Ok(Json(ApiReply::status(DELETE_COLLECTION_OK)))
}

// ---------------------------------------------------------------------------
// Single item
// ---------------------------------------------------------------------------

/// GET /api/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Option<Movie>>> {
    let Path(id) = id?;
    let movie = MovieRepo::find_by_id(&state.pool, id).await?;
    tracing::info!(movie_id = id, found = movie.is_some(), "Movie fetched");
    Ok(Json(movie))
}

/// PUT /api/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> AppResult<Json<ApiReply>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let touched = MovieRepo::update(&state.pool, id, &input).await?;
    tracing::info!(movie_id = id, touched, "Movie updated");
    Ok(Json(ApiReply::status(UPDATE_ITEM_OK)))
}

/// DELETE /api/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ApiReply>> {
    let Path(id) = id?;
    let removed = MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(movie_id = id, removed, "Movie deleted");
    Ok(Json(ApiReply::status(DELETE_ITEM_OK)))
}
