//! Tests for the HTTP autocomplete client

use super::*;
use crate::suggestion::RenderedOption;
use crate::test_utils::test_helpers::{block_on, serve_http};

#[test]
fn test_url_for_joins_base_and_path() {
    let source = HttpSource::new("http://localhost:5000/", None).unwrap();
    assert_eq!(source.base_url(), "http://localhost:5000");
    assert_eq!(
        source.url_for("diseases", "yellow fever", None),
        "http://localhost:5000/autocomplete/diseases?prefix=yellow%20fever"
    );
}

#[test]
fn test_fetch_parses_success_body() {
    let body = r#"[["Berlin", "", "Q64", "capital of Germany"], "Q1055"]"#.to_string();
    let (base_url, lines, handle) = serve_http(vec![(200, body)]);
    let source = HttpSource::new(base_url, None).unwrap();

    let items = block_on(source.fetch("geolocations", "Ber lin", None)).unwrap();
    handle.join().unwrap();

    let options: Vec<RenderedOption> = items.iter().map(RenderedOption::from).collect();
    assert_eq!(
        options,
        vec![
            RenderedOption::new("Q64", "Berlin"),
            RenderedOption::new("Q1055", "Q1055"),
        ]
    );
    assert_eq!(
        lines.recv().unwrap(),
        "GET /autocomplete/geolocations?prefix=Ber%20lin HTTP/1.1"
    );
}

#[test]
fn test_fetch_sends_top_n_when_set() {
    let (base_url, lines, handle) = serve_http(vec![(200, "[]".to_string())]);
    let source = HttpSource::new(base_url, None).unwrap();

    let items = block_on(source.fetch("alerts", "a", Some(5))).unwrap();
    handle.join().unwrap();

    assert!(items.is_empty());
    assert_eq!(
        lines.recv().unwrap(),
        "GET /autocomplete/alerts?prefix=a&top_n=5 HTTP/1.1"
    );
}

#[test]
fn test_fetch_non_success_status_is_http_error() {
    let (base_url, _lines, handle) = serve_http(vec![(500, "oops".to_string())]);
    let source = HttpSource::new(base_url, None).unwrap();

    let result = block_on(source.fetch("diseases", "x", None));
    handle.join().unwrap();

    assert_eq!(result, Err(FetchError::Http { status: 500 }));
}

#[test]
fn test_fetch_not_found_is_http_error() {
    let (base_url, _lines, handle) = serve_http(vec![(404, String::new())]);
    let source = HttpSource::new(base_url, None).unwrap();

    let result = block_on(source.fetch("nope", "x", None));
    handle.join().unwrap();

    assert_eq!(result, Err(FetchError::Http { status: 404 }));
}

#[test]
fn test_fetch_invalid_json_is_parse_error() {
    let (base_url, _lines, handle) = serve_http(vec![(200, "{\"not\": \"an array\"}".to_string())]);
    let source = HttpSource::new(base_url, None).unwrap();

    let result = block_on(source.fetch("diseases", "x", None));
    handle.join().unwrap();

    assert!(matches!(result, Err(FetchError::Parse(_))));
}

#[test]
fn test_fetch_connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source = HttpSource::new(format!("http://127.0.0.1:{}", port), None).unwrap();

    let result = block_on(source.fetch("diseases", "x", None));
    assert!(matches!(result, Err(FetchError::Network(_))));
}
