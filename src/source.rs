//! Suggestion sources
//!
//! Defines the SuggestionSource enum, FetchError, and the factory that picks
//! a source from configuration.

use thiserror::Error;

use crate::config::ServerConfig;
use crate::error::KgError;
use crate::suggestion::SuggestionItem;

mod http;
mod local;
pub mod trie;

pub use http::HttpSource;
pub use local::LocalSource;

/// Errors that can occur while fetching one batch of suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("Could not fetch autocomplete suggestions (HTTP {status})")]
    Http { status: u16 },

    /// Connection failed or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not a JSON array
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local index has no entries for this endpoint
    #[error("Unknown autocomplete endpoint: {0}")]
    UnknownEndpoint(String),

    /// A newer request superseded this one
    #[error("Request cancelled")]
    Cancelled,
}

/// Where suggestions come from
#[derive(Debug)]
pub enum SuggestionSource {
    /// Remote autocomplete server
    Http(HttpSource),
    /// In-process index loaded from a node file
    Local(LocalSource),
}

impl SuggestionSource {
    /// Create a source from the `[server]` configuration section
    ///
    /// A configured node file takes precedence over the server URL.
    pub fn from_config(config: &ServerConfig) -> Result<Self, KgError> {
        if let Some(path) = &config.nodes_file {
            return Ok(SuggestionSource::Local(LocalSource::from_path(path)?));
        }
        let timeout = config.timeout_ms.map(std::time::Duration::from_millis);
        Ok(SuggestionSource::Http(HttpSource::new(
            config.base_url.clone(),
            timeout,
        )?))
    }

    /// Fetch suggestions for `prefix` from `endpoint`
    pub async fn fetch(
        &self,
        endpoint: &str,
        prefix: &str,
        top_n: Option<usize>,
    ) -> Result<Vec<SuggestionItem>, FetchError> {
        match self {
            SuggestionSource::Http(source) => source.fetch(endpoint, prefix, top_n).await,
            SuggestionSource::Local(source) => source.fetch(endpoint, prefix, top_n).await,
        }
    }

    /// Short human-readable description for the status line
    pub fn describe(&self) -> String {
        match self {
            SuggestionSource::Http(source) => source.base_url().to_string(),
            SuggestionSource::Local(source) => {
                format!("local index ({} endpoints)", source.endpoint_count())
            }
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
