//! Autocomplete request paths
//!
//! Builds `/autocomplete/{endpoint}?prefix={prefix}` with the prefix encoded
//! the way browsers encode a URI component.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Path prefix shared by every autocomplete endpoint
pub const AUTOCOMPLETE_ROOT: &str = "/autocomplete/";

/// Upper bound the server applies to `top_n`
pub const MAX_TOP_N: usize = 100;

// Characters left unescaped by encodeURIComponent
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a single URI component
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the request path (with query string) for one lookup
///
/// `top_n` is only sent when set; the server caps it at [`MAX_TOP_N`].
pub fn autocomplete_path(endpoint: &str, prefix: &str, top_n: Option<usize>) -> String {
    let mut path = format!(
        "{}{}?prefix={}",
        AUTOCOMPLETE_ROOT,
        endpoint,
        encode_uri_component(prefix)
    );
    if let Some(n) = top_n {
        path.push_str(&format!("&top_n={}", n));
    }
    path
}

/// Clamp a requested result count to what the server will honor
pub fn clamp_top_n(requested: Option<usize>) -> usize {
    requested.unwrap_or(MAX_TOP_N).min(MAX_TOP_N)
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
