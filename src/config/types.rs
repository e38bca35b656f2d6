// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::binder::FieldBinding;

/// Default autocomplete server (Flask development port)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Fields bound when the config names none: (field id, endpoint, label)
pub const DEFAULT_FIELDS: &[(&str, &str, &str)] = &[
    ("geolocation", "geolocation/alerts", "Geolocation"),
    ("disease", "diseases", "Disease"),
    ("pathogen", "pathogens", "Pathogen"),
    ("symptom", "symptoms", "Symptom"),
    ("indicator", "indicators", "Indicator"),
    ("alert", "alerts", "Alert"),
];

/// Which responses a binder applies when requests overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Only the most recently issued request may render; older ones are cancelled
    #[default]
    LatestIssued,
    /// Every response renders when it arrives; the last to resolve wins
    LastResolved,
}

/// Suggestion source section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    /// Request timeout; none by default
    pub timeout_ms: Option<u64>,
    /// Sent as `top_n` when set
    pub top_n: Option<usize>,
    /// Answer lookups from this node file instead of the server
    pub nodes_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
            top_n: None,
            nodes_file: None,
        }
    }
}

/// Binder behavior section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub ordering: ResponseOrdering,
}

/// One `[[fields]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    pub endpoint: String,
    /// Suggestion list id; `{id}_options` when omitted
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

impl FieldConfig {
    pub fn to_binding(&self) -> FieldBinding {
        let list_id = self
            .options
            .clone()
            .unwrap_or_else(|| format!("{}_options", self.id));
        let label = self.label.clone().unwrap_or_else(|| self.id.clone());
        FieldBinding::new(self.id.clone(), list_id, self.endpoint.clone(), label)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl Config {
    /// Bindings for every configured field, or the default set
    pub fn field_bindings(&self) -> Vec<FieldBinding> {
        if self.fields.is_empty() {
            return DEFAULT_FIELDS
                .iter()
                .map(|(id, endpoint, label)| {
                    FieldBinding::new(*id, format!("{}_options", id), *endpoint, *label)
                })
                .collect();
        }
        self.fields.iter().map(FieldConfig::to_binding).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.timeout_ms, None);
        assert_eq!(config.server.top_n, None);
        assert!(config.server.nodes_file.is_none());
        assert_eq!(config.autocomplete.ordering, ResponseOrdering::LatestIssued);
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_default_field_bindings() {
        let bindings = Config::default().field_bindings();
        let endpoints: Vec<&str> = bindings.iter().map(|b| b.endpoint.as_str()).collect();
        assert_eq!(
            endpoints,
            vec![
                "geolocation/alerts",
                "diseases",
                "pathogens",
                "symptoms",
                "indicators",
                "alerts"
            ]
        );
        assert_eq!(bindings[0].field_id, "geolocation");
        assert_eq!(bindings[0].list_id, "geolocation_options");
        assert_eq!(bindings[0].label, "Geolocation");
    }

    #[test]
    fn test_configured_fields_replace_defaults() {
        let config: Config = toml::from_str(
            r#"
[[fields]]
id = "place"
endpoint = "geolocation/alerts"
label = "Place"

[[fields]]
id = "symptom"
endpoint = "symptoms"
options = "symptom_list"
"#,
        )
        .unwrap();

        let bindings = config.field_bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].endpoint, "geolocation/alerts");
        assert_eq!(bindings[0].list_id, "place_options");
        assert_eq!(bindings[0].label, "Place");
        assert_eq!(bindings[1].list_id, "symptom_list");
        assert_eq!(bindings[1].label, "symptom");
    }

    #[test]
    fn test_server_section() {
        let config: Config = toml::from_str(
            r#"
[server]
base_url = "https://kg.example.org"
timeout_ms = 2500
top_n = 20
"#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "https://kg.example.org");
        assert_eq!(config.server.timeout_ms, Some(2500));
        assert_eq!(config.server.top_n, Some(20));
    }

    #[test]
    fn test_field_without_endpoint_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[[fields]]\nid = \"x\"\n");
        assert!(result.is_err());
    }

    // For any valid ordering value, parsing stores that ordering.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_ordering_parsing(ordering in prop::sample::select(vec!["latest-issued", "last-resolved"])) {
            let toml_content = format!(r#"
[autocomplete]
ordering = "{}"
"#, ordering);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid ordering: {}", ordering);

            let expected = match ordering {
                "latest-issued" => ResponseOrdering::LatestIssued,
                "last-resolved" => ResponseOrdering::LastResolved,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().autocomplete.ordering, expected);
        }
    }

    // Missing sections or fields always fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_server_section in prop::bool::ANY,
            include_base_url in prop::bool::ANY
        ) {
            let toml_content = if !include_server_section {
                String::new()
            } else if !include_base_url {
                "[server]\n".to_string()
            } else {
                "[server]\nbase_url = \"http://kg.local\"\n".to_string()
            };

            let config: Config = toml::from_str(&toml_content).unwrap();
            if !include_server_section || !include_base_url {
                prop_assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
            } else {
                prop_assert_eq!(config.server.base_url, "http://kg.local");
            }
        }
    }
}
