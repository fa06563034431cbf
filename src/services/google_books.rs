use crate::core::RequestStyle;
use crate::models::{Volume, VolumesResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Public Google Books volumes endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Errors that can occur when querying Google Books
///
/// Callers treat every variant as the same "external fetch failed" outcome;
/// the variants only make operator logs more useful.
#[derive(Debug, Error)]
pub enum GoogleBooksError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Per-request search parameters
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub style: RequestStyle,
    pub max_results: u8,
}

/// Google Books API client
pub struct GoogleBooksClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl GoogleBooksClient {
    /// Create a new Google Books client
    ///
    /// Without `timeout` requests wait as long as the connection stays open.
    pub fn new(
        endpoint: String,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GoogleBooksError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search volumes matching `query`
    ///
    /// Returns an empty list when Google reports no items.
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Volume>, GoogleBooksError> {
        let request = match options.style {
            RequestStyle::Raw => {
                // Query is appended as-is, reserved characters included
                let url = format!(
                    "{}?q={}&maxResults={}",
                    self.endpoint, query, options.max_results
                );
                tracing::debug!("Searching Google Books: {}", url);
                self.client.get(&url)
            }
            RequestStyle::Params => {
                let max_results = options.max_results.to_string();
                let mut params = vec![
                    ("q", query),
                    ("orderBy", "relevance"),
                    ("maxResults", max_results.as_str()),
                    ("printType", "books"),
                ];
                if let Some(key) = &self.api_key {
                    params.push(("key", key.as_str()));
                }
                tracing::debug!("Searching Google Books: {} q={:?}", self.endpoint, query);
                self.client.get(&self.endpoint).query(&params)
            }
        };

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::debug!("Google Books error body: {}", body);
            return Err(GoogleBooksError::ApiError(format!(
                "Volume search failed: {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: VolumesResponse = serde_json::from_str(&body).map_err(|e| {
            GoogleBooksError::InvalidResponse(format!("Failed to parse volumes: {}", e))
        })?;

        let volumes = parsed.into_volumes();
        tracing::debug!("Google Books returned {} volumes", volumes.len());

        Ok(volumes)
    }
}
