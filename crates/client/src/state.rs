//! UI state container.
//!
//! Holds the last fetched list, the staged temp collection, the form, and
//! the current selection. Each method is one transition; none of them talk
//! to the network.

use marquee_core::error::CoreError;
use marquee_core::models::movie::{Movie, NewMovie};

use crate::form::MovieForm;

#[derive(Debug, Clone, Default)]
pub struct CollectionState {
    /// Last successfully fetched server list.
    pub movies: Vec<Movie>,
    /// Client-only staged list, sent only by a replace.
    pub temp_movies: Vec<NewMovie>,
    pub form: MovieForm,
    /// Whether the current-collection view is visible.
    pub show_collection: bool,
    /// Raw text of the movie id input.
    pub selected_id: String,
    /// Last successfully fetched single movie.
    pub selected_movie: Option<Movie>,
}

impl CollectionState {
    /// Replace the list wholesale with a fresh server copy.
    pub fn movies_fetched(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    /// A direct add was confirmed.
    pub fn entry_created(&mut self) {
        self.form.clear();
    }

    /// Append the form to the temp collection and clear it.
    ///
    /// Leaves the state untouched when the title is empty.
    pub fn stage_temp(&mut self) -> Result<(), CoreError> {
        let movie = self.form.to_payload()?;
        self.temp_movies.push(movie);
        self.form.clear();
        Ok(())
    }

    /// A replace was confirmed. The caller refreshes `movies` next.
    pub fn collection_replaced(&mut self) {
        self.temp_movies.clear();
        self.show_collection = false;
        self.selected_movie = None;
    }

    /// A lookup finished; `None` means no record has that id.
    pub fn movie_selected(&mut self, movie: Option<Movie>) {
        self.selected_movie = movie;
        self.selected_id.clear();
    }

    /// A lookup failed outright.
    pub fn selection_failed(&mut self) {
        self.selected_movie = None;
        self.selected_id.clear();
    }

    /// An update was confirmed. The caller refreshes `movies` next.
    pub fn movie_updated(&mut self) {
        self.form.clear();
        self.selected_movie = None;
        self.selected_id.clear();
    }

    /// A delete-all was confirmed; no re-fetch is needed.
    pub fn collection_deleted(&mut self) {
        self.movies.clear();
        self.selected_movie = None;
    }

    /// Load a listed movie into the form and target it for the next update.
    pub fn begin_edit(&mut self, movie: &Movie) {
        self.form.fill_from(movie);
        self.selected_id = movie.id.to_string();
    }

    pub fn show_collection(&mut self) {
        self.show_collection = true;
    }

    pub fn set_selected_id(&mut self, text: impl Into<String>) {
        self.selected_id = text.into();
    }
}
