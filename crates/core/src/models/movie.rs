//! Movie record and write DTO, shared by the server and the client.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::movie::or_not_available;
use crate::types::DbId;

/// A row from the `movies` table.
///
/// Columns are nullable: a write that omits a field stores NULL, and reads
/// return it as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub duration: Option<String>,
}

/// DTO for inserting or fully replacing a movie.
///
/// Any `id` present in the input is ignored; ids are always assigned by
/// the store. Numeric JSON values are accepted and stored as their text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub duration: Option<String>,
}

impl NewMovie {
    /// Build a payload from raw form text, substituting `"N/A"` for every
    /// blank field except the title.
    pub fn from_form(
        title: &str,
        director: &str,
        genre: &str,
        year: &str,
        rating: &str,
        duration: &str,
    ) -> Self {
        Self {
            title: Some(title.to_string()),
            director: Some(or_not_available(director)),
            genre: Some(or_not_available(genre)),
            year: Some(or_not_available(year)),
            rating: Some(or_not_available(rating)),
            duration: Some(or_not_available(duration)),
        }
    }
}

/// Accept a JSON string, number, or boolean as text; null or absent is `None`.
fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a text value, found {other}"
        ))),
    }
}
