use marquee_core::error::CoreError;

/// Errors surfaced by client operations. None of these reach the rendered
/// view; callers log them.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured API URL cannot carry an item path.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    /// The server answered `{"error": ...}`.
    #[error("API reported: {0}")]
    Api(String),

    /// The server answered with a status string other than the one expected.
    #[error("unexpected status '{actual}', expected '{expected}'")]
    UnexpectedStatus {
        expected: &'static str,
        actual: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation failed before any request was sent.
    #[error(transparent)]
    Core(#[from] CoreError),
}
