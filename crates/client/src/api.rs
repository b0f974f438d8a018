//! REST client for the movie collection endpoints.
//!
//! Wraps the seven `/api` routes using [`reqwest`]. Ids are passed as text
//! because they come straight from an input field; the server decides
//! whether they parse.

use marquee_core::movie::ApiReply;
use marquee_core::models::movie::{Movie, NewMovie};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Default base URL of the API, including the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// HTTP client for one movie collection server.
#[derive(Clone)]
pub struct MovieApi {
    client: reqwest::Client,
    api_url: String,
}

impl MovieApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base URL including the `/api` prefix, e.g.
    ///   `http://localhost:3001/api`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET /api`
    pub async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let response = self.client.get(&self.api_url).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/{id}`. An unknown id yields `Ok(None)`.
    pub async fn get_movie(&self, id: &str) -> Result<Option<Movie>, ClientError> {
        let response = self.client.get(self.item_url(id)?).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api`
    pub async fn create_movie(&self, movie: &NewMovie) -> Result<ApiReply, ClientError> {
        let response = self.client.post(&self.api_url).json(movie).send().await?;
        Self::parse_reply(response).await
    }

    /// `PUT /api` with the full replacement list.
    pub async fn replace_collection(&self, movies: &[NewMovie]) -> Result<ApiReply, ClientError> {
        let response = self.client.put(&self.api_url).json(movies).send().await?;
        Self::parse_reply(response).await
    }

    /// `DELETE /api`
    pub async fn delete_collection(&self) -> Result<ApiReply, ClientError> {
        let response = self.client.delete(&self.api_url).send().await?;
        Self::parse_reply(response).await
    }

    /// `PUT /api/{id}`
    pub async fn update_movie(&self, id: &str, movie: &NewMovie) -> Result<ApiReply, ClientError> {
        let response = self
            .client
            .put(self.item_url(id)?)
            .json(movie)
            .send()
            .await?;
        Self::parse_reply(response).await
    }

    /// `DELETE /api/{id}`
    pub async fn delete_movie(&self, id: &str) -> Result<ApiReply, ClientError> {
        let response = self.client.delete(self.item_url(id)?).send().await?;
        Self::parse_reply(response).await
    }

    // ---- private helpers ----

    /// `{api_url}/{id}` with `id` pushed as one percent-encoded path
    /// segment, so text like `1?x` or `../health` cannot leave the item route.
    fn item_url(&self, id: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.api_url)))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push(id.trim());
        Ok(url)
    }

    /// Ensure the response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Decode a data payload. An `{"error": ...}` object in place of the
    /// data becomes [`ClientError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let value: serde_json::Value = Self::ensure_success(response).await?.json().await?;
        if let Some(message) = value.get("error").and_then(serde_json::Value::as_str) {
            return Err(ClientError::Api(message.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a `{status}` / `{error}` reply without judging it.
    async fn parse_reply(response: reqwest::Response) -> Result<ApiReply, ClientError> {
        let reply = Self::ensure_success(response).await?.json().await?;
        Ok(reply)
    }
}
