//! Local suggestion source
//!
//! Answers lookups from node files exported from the knowledge graph, with
//! the same rules the autocomplete server applies.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::FetchError;
use super::trie::{NodeRecord, NodesTrie};
use crate::error::KgError;
use crate::request::clamp_top_n;
use crate::suggestion::SuggestionItem;

/// `endpoint -> curie -> node`
type NodeFile = HashMap<String, BTreeMap<String, NodeRecord>>;

/// One prefix index per endpoint
#[derive(Debug, Clone, Default)]
pub struct LocalSource {
    indexes: HashMap<String, NodesTrie>,
}

impl LocalSource {
    pub fn from_path(path: &Path) -> Result<Self, KgError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, KgError> {
        let file: NodeFile = serde_json::from_str(contents)
            .map_err(|e| KgError::InvalidNodeFile(e.to_string()))?;

        let indexes = file
            .iter()
            .map(|(endpoint, nodes)| (endpoint.clone(), NodesTrie::from_nodes(nodes)))
            .collect::<HashMap<_, _>>();

        for (endpoint, trie) in &indexes {
            log::debug!("Indexed {} keys for endpoint '{}'", trie.len(), endpoint);
        }

        Ok(Self { indexes })
    }

    pub fn endpoint_count(&self) -> usize {
        self.indexes.len()
    }

    /// Search one endpoint's index
    ///
    /// A prefix containing `:` is treated as a curie being typed and yields
    /// nothing.
    pub fn search(
        &self,
        endpoint: &str,
        prefix: &str,
        top_n: Option<usize>,
    ) -> Result<Vec<SuggestionItem>, FetchError> {
        let trie = self
            .indexes
            .get(endpoint)
            .ok_or_else(|| FetchError::UnknownEndpoint(endpoint.to_string()))?;

        if prefix.contains(':') {
            return Ok(Vec::new());
        }

        Ok(trie
            .case_insensitive_search(prefix, clamp_top_n(top_n))
            .into_iter()
            .map(SuggestionItem::from)
            .collect())
    }

    pub async fn fetch(
        &self,
        endpoint: &str,
        prefix: &str,
        top_n: Option<usize>,
    ) -> Result<Vec<SuggestionItem>, FetchError> {
        self.search(endpoint, prefix, top_n)
    }
}
