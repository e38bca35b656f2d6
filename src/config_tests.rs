//! Tests for config loading

use std::io::Write;

use super::*;

#[test]
fn test_missing_file_gives_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("config.toml"));
    assert!(result.warning.is_none());
    assert_eq!(result.config.server.base_url, DEFAULT_BASE_URL);
}

#[test]
fn test_valid_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nbase_url = \"http://kg.internal:8000\"\n\n[autocomplete]\nordering = \"last-resolved\""
    )
    .unwrap();

    let result = load_config_from_path(file.path());
    assert!(result.warning.is_none());
    assert_eq!(result.config.server.base_url, "http://kg.internal:8000");
    assert_eq!(
        result.config.autocomplete.ordering,
        ResponseOrdering::LastResolved
    );
}

#[test]
fn test_invalid_file_falls_back_with_warning() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[autocomplete]\nordering = \"whenever\"").unwrap();

    let result = load_config_from_path(file.path());
    assert_eq!(result.config.autocomplete.ordering, ResponseOrdering::LatestIssued);
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Config error, using defaults"));
}

#[test]
fn test_parse_config_error_kind() {
    assert!(matches!(
        parse_config("this is = = not toml"),
        Err(KgError::InvalidConfig(_))
    ));
}

#[test]
fn test_config_path_ends_with_app_dir() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/kgcomplete/config.toml"));
    }
}
