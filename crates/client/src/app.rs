//! User actions: each one issues at most one mutating call, checks the reply
//! against its exact status string, and applies the matching state
//! transition.
//!
//! Failures are logged and returned but never alter state, except where a
//! failed lookup clears the selection.

use marquee_core::error::CoreError;
use marquee_core::movie::{
    ApiReply, CREATE_ENTRY_OK, DELETE_COLLECTION_OK, DELETE_ITEM_OK, REPLACE_COLLECTION_OK,
    UPDATE_ITEM_OK,
};
use marquee_core::models::movie::Movie;

use crate::api::MovieApi;
use crate::error::ClientError;
use crate::state::CollectionState;

pub struct MovieApp {
    api: MovieApi,
    pub state: CollectionState,
}

impl MovieApp {
    pub fn new(api: MovieApi) -> Self {
        Self {
            api,
            state: CollectionState::default(),
        }
    }

    /// Initial load, equivalent to mounting the view.
    pub async fn start(api: MovieApi) -> Self {
        let mut app = Self::new(api);
        // Logged inside; an unreachable server just starts with an empty list.
        let _ = app.fetch_movies().await;
        app
    }

    /// Refresh `movies` from the server. On failure the previous list stays.
    pub async fn fetch_movies(&mut self) -> Result<(), ClientError> {
        let movies = self
            .api
            .list_movies()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Cannot fetch movies"))?;
        tracing::debug!(count = movies.len(), "Movies fetched");
        self.state.movies_fetched(movies);
        Ok(())
    }

    /// Create one movie from the form.
    pub async fn add_movie(&mut self) -> Result<(), ClientError> {
        self.request_create()
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Cannot add movie"))?;

        self.state.entry_created();
        self.refresh().await;
        Ok(())
    }

    /// Stage the form in the temp collection. No network call.
    pub fn add_temp_movie(&mut self) -> Result<(), ClientError> {
        self.state
            .stage_temp()
            .inspect_err(|err| tracing::error!(error = %err, "Cannot stage movie"))?;
        tracing::debug!(staged = self.state.temp_movies.len(), "Movie staged");
        Ok(())
    }

    /// Replace the server collection with the temp collection.
    ///
    /// A no-op when nothing is staged. The server answers only after every
    /// insert has committed, so the list is re-read immediately.
    pub async fn replace_collection(&mut self) -> Result<(), ClientError> {
        if self.state.temp_movies.is_empty() {
            return Ok(());
        }

        let reply = self.api.replace_collection(&self.state.temp_movies).await;
        reply
            .and_then(|reply| expect_status(reply, REPLACE_COLLECTION_OK))
            .inspect_err(|err| tracing::error!(error = %err, "Cannot replace collection"))?;

        self.state.collection_replaced();
        self.refresh().await;
        Ok(())
    }

    /// Look up the movie whose id is typed in the id input.
    ///
    /// A blank input is a no-op. Either outcome clears the input.
    pub async fn select_movie(&mut self) -> Result<(), ClientError> {
        let id = self.state.selected_id.trim().to_string();
        if id.is_empty() {
            return Ok(());
        }

        match self.api.get_movie(&id).await {
            Ok(movie) => {
                if movie.is_none() {
                    tracing::info!(movie_id = %id, "No movie with that id");
                }
                self.state.movie_selected(movie);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, movie_id = %id, "Cannot fetch movie");
                self.state.selection_failed();
                Err(err)
            }
        }
    }

    /// Overwrite movie `id` with the form contents.
    pub async fn edit_movie(&mut self, id: &str) -> Result<(), ClientError> {
        self.request_update(id)
            .await
            .inspect_err(|err| tracing::error!(error = %err, "Cannot edit movie"))?;

        self.state.movie_updated();
        self.refresh().await;
        Ok(())
    }

    /// Update the movie currently targeted by the id input.
    pub async fn update_selected(&mut self) -> Result<(), ClientError> {
        let id = self.state.selected_id.clone();
        self.edit_movie(&id).await
    }

    /// Delete one movie, then refresh the list.
    pub async fn delete_movie(&mut self, id: &str) -> Result<(), ClientError> {
        let reply = self.api.delete_movie(id).await;
        reply
            .and_then(|reply| expect_status(reply, DELETE_ITEM_OK))
            .inspect_err(|err| tracing::error!(error = %err, "Cannot delete movie"))?;

        self.refresh().await;
        Ok(())
    }

    /// Delete every movie. The local list is cleared without a re-fetch.
    pub async fn delete_all_movies(&mut self) -> Result<(), ClientError> {
        let reply = self.api.delete_collection().await;
        reply
            .and_then(|reply| expect_status(reply, DELETE_COLLECTION_OK))
            .inspect_err(|err| tracing::error!(error = %err, "Cannot delete all movies"))?;

        self.state.collection_deleted();
        Ok(())
    }

    /// Load a listed movie into the form for a later update.
    pub fn begin_edit(&mut self, movie: &Movie) {
        self.state.begin_edit(movie);
    }

    pub fn show_collection(&mut self) {
        self.state.show_collection();
    }

    async fn request_create(&self) -> Result<(), ClientError> {
        let payload = self.state.form.to_payload()?;
        let reply = self.api.create_movie(&payload).await?;
        expect_status(reply, CREATE_ENTRY_OK)
    }

    async fn request_update(&self, id: &str) -> Result<(), ClientError> {
        if id.trim().is_empty() {
            return Err(CoreError::Validation("Movie ID must be filled.".into()).into());
        }
        let payload = self.state.form.to_update_payload();
        let reply = self.api.update_movie(id, &payload).await?;
        expect_status(reply, UPDATE_ITEM_OK)
    }

    /// Re-read the list after a confirmed mutation. A failed refresh does
    /// not undo the mutation, so its error is only logged.
    async fn refresh(&mut self) {
        let _ = self.fetch_movies().await;
    }
}

/// Accept `reply` only if it carries exactly `expected`.
fn expect_status(reply: ApiReply, expected: &'static str) -> Result<(), ClientError> {
    if reply.is_status(expected) {
        return Ok(());
    }
    match reply {
        ApiReply::Error { error } => Err(ClientError::Api(error)),
        ApiReply::Status { status } => Err(ClientError::UnexpectedStatus {
            expected,
            actual: status,
        }),
    }
}
