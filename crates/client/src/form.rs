//! The six-field movie entry form.

use std::fmt;
use std::str::FromStr;

use marquee_core::error::CoreError;
use marquee_core::movie::validate_title;
use marquee_core::models::movie::{Movie, NewMovie};

/// One input of the movie form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Director,
    Genre,
    Year,
    Rating,
    Duration,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Director,
        FormField::Genre,
        FormField::Year,
        FormField::Rating,
        FormField::Duration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Director => "director",
            FormField::Genre => "genre",
            FormField::Year => "year",
            FormField::Rating => "rating",
            FormField::Duration => "duration",
        }
    }

    /// Input hint shown next to an empty field.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Director => "Director",
            FormField::Genre => "Genre",
            FormField::Year => "Year(> 1900)",
            FormField::Rating => "Rating(0-10)",
            FormField::Duration => "Duration(minutes)",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::Validation(format!("unknown form field '{s}'")))
    }
}

/// Free-form text for each movie field, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub duration: String,
}

impl MovieForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Director => &self.director,
            FormField::Genre => &self.genre,
            FormField::Year => &self.year,
            FormField::Rating => &self.rating,
            FormField::Duration => &self.duration,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Director => &mut self.director,
            FormField::Genre => &mut self.genre,
            FormField::Year => &mut self.year,
            FormField::Rating => &mut self.rating,
            FormField::Duration => &mut self.duration,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copy a stored record into the form for editing. Null columns become
    /// empty inputs.
    pub fn fill_from(&mut self, movie: &Movie) {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        self.title = text(&movie.title);
        self.director = text(&movie.director);
        self.genre = text(&movie.genre);
        self.year = text(&movie.year);
        self.rating = text(&movie.rating);
        self.duration = text(&movie.duration);
    }

    /// Payload for creating or staging a movie: the title is required.
    pub fn to_payload(&self) -> Result<NewMovie, CoreError> {
        validate_title(&self.title)?;
        Ok(self.to_update_payload())
    }

    /// Payload for updating a movie: blank fields default to `"N/A"` but
    /// the title is sent as typed.
    pub fn to_update_payload(&self) -> NewMovie {
        NewMovie::from_form(
            &self.title,
            &self.director,
            &self.genre,
            &self.year,
            &self.rating,
            &self.duration,
        )
    }
}
