//! Route definitions for the movie collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes, mounted at the router root.
///
/// ```text
/// GET    /api          -> list
/// PUT    /api          -> replace_collection
/// POST   /api          -> create
/// DELETE /api          -> delete_all
/// GET    /api/{id}     -> get_by_id
/// PUT    /api/{id}     -> update
/// DELETE /api/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api",
            get(movies::list)
                .put(movies::replace_collection)
                .post(movies::create)
                .delete(movies::delete_all),
        )
        .route(
            "/api/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}
