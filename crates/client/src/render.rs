//! Plain-text rendering of the client state.

use std::fmt::Write as _;

use marquee_core::movie::parse_numeric_field;
use marquee_core::models::movie::{Movie, NewMovie};

use crate::form::FormField;
use crate::state::CollectionState;

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn describe(
    title: &Option<String>,
    director: &Option<String>,
    genre: &Option<String>,
    year: &Option<String>,
    rating: &Option<String>,
    duration: &Option<String>,
) -> String {
    format!(
        "Title: {} | Director: {} | Genre: {} | Year: {} | Rating: {} | Duration: {}",
        field(title),
        field(director),
        field(genre),
        field(year),
        field(rating),
        field(duration),
    )
}

/// One row of the current collection, prefixed with the record id.
pub fn movie_line(movie: &Movie) -> String {
    format!(
        "{}. {}",
        movie.id,
        describe(
            &movie.title,
            &movie.director,
            &movie.genre,
            &movie.year,
            &movie.rating,
            &movie.duration,
        )
    )
}

/// One row of the temp collection; `index` is zero-based, display is one-based.
pub fn temp_line(index: usize, movie: &NewMovie) -> String {
    format!(
        "{}. {}",
        index + 1,
        describe(
            &movie.title,
            &movie.director,
            &movie.genre,
            &movie.year,
            &movie.rating,
            &movie.duration,
        )
    )
}

/// The detail line for a looked-up movie.
pub fn selected_line(movie: &Movie) -> String {
    format!(
        "ID: {} | {}",
        movie.id,
        describe(
            &movie.title,
            &movie.director,
            &movie.genre,
            &movie.year,
            &movie.rating,
            &movie.duration,
        )
    )
}

/// Footer under the current collection. Ratings that are not integers
/// (including `"N/A"`) are left out of the average.
pub fn collection_summary(movies: &[Movie]) -> String {
    let ratings: Vec<i64> = movies
        .iter()
        .filter_map(|m| m.rating.as_deref().and_then(parse_numeric_field))
        .collect();

    if ratings.is_empty() {
        return format!("{} movies", movies.len());
    }
    let total: i128 = ratings.iter().map(|&r| i128::from(r)).sum();
    let average = total as f64 / ratings.len() as f64;
    format!(
        "{} movies, average rating {average:.1} over {} rated",
        movies.len(),
        ratings.len()
    )
}

/// Render the whole view: form, temp collection, selection, and the
/// current collection when it is visible.
pub fn render(state: &CollectionState) -> String {
    let mut out = String::new();

    out.push_str("== Movie Form ==\n");
    for field in FormField::ALL {
        let value = state.form.get(field);
        if value.is_empty() {
            let _ = writeln!(out, "  {field}: <{}>", field.placeholder());
        } else {
            let _ = writeln!(out, "  {field}: {value}");
        }
    }

    out.push_str("== New Temp Movie Collection ==\n");
    for (index, movie) in state.temp_movies.iter().enumerate() {
        let _ = writeln!(out, "  {}", temp_line(index, movie));
    }

    if !state.selected_id.is_empty() {
        let _ = writeln!(out, "Movie ID: {}", state.selected_id);
    }
    if let Some(movie) = &state.selected_movie {
        let _ = writeln!(out, "{}", selected_line(movie));
    }

    out.push_str("== Current Collection ==\n");
    if state.show_collection {
        for movie in &state.movies {
            let _ = writeln!(out, "  {}", movie_line(movie));
        }
        let _ = writeln!(out, "  ({})", collection_summary(&state.movies));
    }

    out
}
