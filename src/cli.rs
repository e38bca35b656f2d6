//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, FieldConfig, ResponseOrdering};
use crate::error::KgError;

/// Terminal form with server-backed autocomplete for knowledge-graph terms
#[derive(Debug, Default, Parser)]
#[command(name = "kgcomplete", version, about)]
pub struct Args {
    /// Autocomplete server base URL
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Serve suggestions from a local node file instead of a server
    #[arg(long, value_name = "FILE")]
    pub nodes: Option<PathBuf>,

    /// Bind a form field to an endpoint (repeatable)
    #[arg(long = "field", value_name = "ID=ENDPOINT", value_parser = parse_field)]
    pub fields: Vec<FieldConfig>,

    /// Maximum number of suggestions per lookup
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Config file to use instead of ~/.config/kgcomplete/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render every response as it arrives, even if a newer lookup was issued
    #[arg(long)]
    pub last_resolved: bool,

    /// Print suggestions for one prefix and exit
    #[arg(
        long,
        num_args = 2,
        value_names = ["ENDPOINT", "PREFIX"],
        allow_hyphen_values = true
    )]
    pub lookup: Option<Vec<String>>,
}

impl Args {
    /// Override config values with the ones given on the command line
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(nodes) = &self.nodes {
            config.server.nodes_file = Some(nodes.clone());
        }
        if !self.fields.is_empty() {
            config.fields = self.fields.clone();
        }
        if self.top_n.is_some() {
            config.server.top_n = self.top_n;
        }
        if self.last_resolved {
            config.autocomplete.ordering = ResponseOrdering::LastResolved;
        }
    }

    /// Endpoint and prefix of `--lookup`, if given
    pub fn lookup_target(&self) -> Option<(&str, &str)> {
        match self.lookup.as_deref() {
            Some([endpoint, prefix]) => Some((endpoint.as_str(), prefix.as_str())),
            _ => None,
        }
    }
}

/// Parse `ID=ENDPOINT`
fn parse_field(spec: &str) -> Result<FieldConfig, KgError> {
    let Some((id, endpoint)) = spec.split_once('=') else {
        return Err(KgError::InvalidField(spec.to_string()));
    };
    let (id, endpoint) = (id.trim(), endpoint.trim());
    if id.is_empty() || endpoint.is_empty() {
        return Err(KgError::InvalidField(spec.to_string()));
    }

    Ok(FieldConfig {
        id: id.to_string(),
        endpoint: endpoint.to_string(),
        options: None,
        label: None,
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
