//! HTTP autocomplete client
//!
//! Issues `GET {base_url}/autocomplete/{endpoint}?prefix=...` and parses the
//! JSON array body.

use std::time::Duration;

use super::FetchError;
use crate::request::autocomplete_path;
use crate::suggestion::{SuggestionItem, parse_suggestions};

/// Autocomplete server client
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a client for the server at `base_url`
    ///
    /// No timeout is applied unless one is given.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for one lookup
    pub fn url_for(&self, endpoint: &str, prefix: &str, top_n: Option<usize>) -> String {
        format!("{}{}", self.base_url, autocomplete_path(endpoint, prefix, top_n))
    }

    pub async fn fetch(
        &self,
        endpoint: &str,
        prefix: &str,
        top_n: Option<usize>,
    ) -> Result<Vec<SuggestionItem>, FetchError> {
        let url = self.url_for(endpoint, prefix, top_n);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
