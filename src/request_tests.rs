//! Tests for request path construction

use super::*;
use proptest::prelude::*;

#[test]
fn test_path_for_plain_prefix() {
    assert_eq!(
        autocomplete_path("geolocations", "Berlin", None),
        "/autocomplete/geolocations?prefix=Berlin"
    );
}

#[test]
fn test_path_encodes_spaces_as_percent_20() {
    assert_eq!(
        autocomplete_path("diseases", "yellow fever", None),
        "/autocomplete/diseases?prefix=yellow%20fever"
    );
}

#[test]
fn test_path_keeps_nested_endpoint() {
    assert_eq!(
        autocomplete_path("geolocation/alerts", "Kiel", None),
        "/autocomplete/geolocation/alerts?prefix=Kiel"
    );
}

#[test]
fn test_path_with_top_n() {
    assert_eq!(
        autocomplete_path("alerts", "a", Some(10)),
        "/autocomplete/alerts?prefix=a&top_n=10"
    );
}

#[test]
fn test_encode_matches_encode_uri_component() {
    // Expected values taken from encodeURIComponent
    assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_uri_component("MESH:D005842"), "MESH%3AD005842");
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("São Paulo"), "S%C3%A3o%20Paulo");
    assert_eq!(encode_uri_component("100%"), "100%25");
    assert_eq!(encode_uri_component("a/b?c#d+e"), "a%2Fb%3Fc%23d%2Be");
}

#[test]
fn test_clamp_top_n() {
    assert_eq!(clamp_top_n(None), 100);
    assert_eq!(clamp_top_n(Some(5)), 5);
    assert_eq!(clamp_top_n(Some(500)), 100);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_encoded_prefix_has_no_query_delimiters(prefix in ".{0,40}") {
        let encoded = encode_uri_component(&prefix);
        prop_assert!(!encoded.contains('&'));
        prop_assert!(!encoded.contains('='));
        prop_assert!(!encoded.contains(' '));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(encoded.is_ascii());

        let decoded = percent_encoding::percent_decode_str(&encoded)
            .decode_utf8()
            .unwrap();
        prop_assert_eq!(decoded.as_ref(), prefix.as_str());
    }
}
