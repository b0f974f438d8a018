use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::movie::ApiReply;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as HTTP 200 with an `{"error": message}` body;
/// callers tell failure from success by payload shape alone.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request could not be decoded (bad JSON body or path id).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request ran past the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A handler panicked or the middleware failed. The detail is logged,
    /// not sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// The message placed in the `error` field.
    ///
    /// Database errors surface the store's own text (e.g.
    /// `no such table: movies`) without the sqlx prefix.
    pub fn message(&self) -> String {
        match self {
            AppError::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
            AppError::Database(other) => other.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Timeout => "Request timed out".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();
        tracing::error!(error = %self, "Request failed");
        (StatusCode::OK, Json(ApiReply::error(message))).into_response()
    }
}
