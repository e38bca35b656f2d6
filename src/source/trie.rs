//! Case-insensitive prefix index over knowledge-graph nodes
//!
//! Keys are lowercased names and synonyms, kept in sorted order so prefix
//! matches come back alphabetically. When two nodes lowercase to the same
//! key the later one is stored under `key_1`, `key_2`, ... so both stay
//! searchable.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::suggestion::SuggestionItem;

/// One node as it appears in a node file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Indexed value: what a search returns for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry {
    /// Name or synonym that matched
    pub match_text: String,
    /// Primary node name
    pub name: String,
    pub curie: String,
    pub definition: String,
}

impl From<&NodeEntry> for SuggestionItem {
    fn from(entry: &NodeEntry) -> Self {
        SuggestionItem::Entry(
            Value::String(entry.match_text.clone()),
            Value::String(entry.name.clone()),
            Value::String(entry.curie.clone()),
            Value::String(entry.definition.clone()),
        )
    }
}

/// Sorted, case-insensitive prefix index
#[derive(Debug, Clone, Default)]
pub struct NodesTrie {
    entries: BTreeMap<String, NodeEntry>,
}

impl NodesTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `curie -> node` records
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a NodeRecord)>,
    {
        let mut trie = Self::new();
        for (curie, node) in nodes {
            trie.insert_node(curie, node);
        }
        trie
    }

    /// Index a node's name and every synonym
    pub fn insert_node(&mut self, curie: &str, node: &NodeRecord) {
        let definition = node.definition.clone().unwrap_or_default();

        self.insert(
            &node.name,
            NodeEntry {
                match_text: node.name.clone(),
                name: node.name.clone(),
                curie: curie.to_string(),
                definition: definition.clone(),
            },
        );

        for synonym in &node.synonyms {
            self.insert(
                synonym,
                NodeEntry {
                    match_text: synonym.clone(),
                    name: node.name.clone(),
                    curie: curie.to_string(),
                    definition: definition.clone(),
                },
            );
        }
    }

    fn insert(&mut self, text: &str, entry: NodeEntry) {
        let key = self.free_key(&text.to_lowercase());
        self.entries.insert(key, entry);
    }

    fn free_key(&self, key: &str) -> String {
        if !self.entries.contains_key(key) {
            return key.to_string();
        }
        let mut ix = 1;
        loop {
            let candidate = format!("{}_{}", key, ix);
            if !self.entries.contains_key(&candidate) {
                return candidate;
            }
            ix += 1;
        }
    }

    /// Entries whose key starts with `prefix` (ignoring case), at most `top_n`
    pub fn case_insensitive_search(&self, prefix: &str, top_n: usize) -> Vec<&NodeEntry> {
        let prefix = prefix.to_lowercase();
        self.entries
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .take(top_n)
            .map(|(_, entry)| entry)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod trie_tests;
