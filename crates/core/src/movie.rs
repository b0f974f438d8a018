//! Movie record conventions shared by the API and its client.
//!
//! The wire format keeps every descriptive field as text, including the
//! nominally numeric `year`, `rating` and `duration` columns, so that the
//! `"N/A"` placeholder is a legal value everywhere. Numbers are only parsed
//! at presentation boundaries via [`parse_numeric_field`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status strings
// ---------------------------------------------------------------------------

pub const REPLACE_COLLECTION_OK: &str = "REPLACE COLLECTION SUCCESSFUL";
pub const CREATE_ENTRY_OK: &str = "CREATE ENTRY SUCCESSFUL";
pub const DELETE_COLLECTION_OK: &str = "DELETE COLLECTION SUCCESSFUL";
pub const UPDATE_ITEM_OK: &str = "UPDATE ITEM SUCCESSFUL";
pub const DELETE_ITEM_OK: &str = "DELETE ITEM SUCCESSFUL";

/// Placeholder stored for optional fields the user left blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Envelope returned by every mutating endpoint.
///
/// Success and failure share HTTP 200 and are told apart by shape only:
/// `{"status": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiReply {
    Status { status: String },
    Error { error: String },
}

impl ApiReply {
    pub fn status(status: &str) -> Self {
        Self::Status {
            status: status.to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Exact match against one of the status constants. An error reply, or a
    /// status with any other text, never matches.
    pub fn is_status(&self, expected: &str) -> bool {
        matches!(self, Self::Status { status } if status == expected)
    }
}

// ---------------------------------------------------------------------------
// Field conventions
// ---------------------------------------------------------------------------

/// Substitute [`NOT_AVAILABLE`] for an empty field. Non-empty input, even
/// whitespace, is kept verbatim.
pub fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// A movie must have a non-empty title before it leaves the client.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation("Title must be filled.".into()));
    }
    Ok(())
}

/// Parse a text-encoded numeric field for display or sorting.
///
/// Returns `None` for `"N/A"` or anything else that is not an integer.
pub fn parse_numeric_field(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
