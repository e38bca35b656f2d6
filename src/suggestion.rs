//! Suggestion payloads
//!
//! The autocomplete server answers with a JSON array whose items come in two
//! shapes:
//! ```text
//! ["Berlin", "GND123", "Q64", "capital of Germany"]   // match, label, curie, description
//! "Q64"                                                // bare curie
//! ```
//! The shape is resolved once, at the deserialization boundary, into
//! [`SuggestionItem`]. Everything downstream works with [`RenderedOption`].

use serde::Deserialize;
use serde_json::Value;

/// One entry of the server's response array
///
/// Items are classified by shape only: any 4-element array is an entry,
/// whatever its element types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SuggestionItem {
    /// `[match_text, secondary_label, curie, description]`
    Entry(Value, Value, Value, Value),
    /// A bare curie, used as both match text and identifier
    Curie(String),
    /// Anything else; renders as an empty option
    Malformed(Value),
}

/// String form of one entry element: strings as-is, null as empty, other
/// scalars and containers in their JSON form
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Whether a secondary label is present (`null`, `false`, `0` and `""` are not)
fn has_label(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A suggestion as it appears in a suggestion list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOption {
    /// Value submitted when the option is accepted (the curie)
    pub value: String,
    /// Display text: match text, plus ` (label)` when a secondary label exists
    pub text: String,
}

impl RenderedOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

impl From<&SuggestionItem> for RenderedOption {
    fn from(item: &SuggestionItem) -> Self {
        match item {
            SuggestionItem::Entry(match_text, label, curie, _) => {
                let match_text = display_text(match_text);
                let text = if has_label(label) {
                    format!("{} ({})", match_text, display_text(label))
                } else {
                    match_text
                };
                RenderedOption::new(display_text(curie), text)
            }
            SuggestionItem::Curie(curie) => RenderedOption::new(curie.clone(), curie.clone()),
            SuggestionItem::Malformed(_) => RenderedOption::default(),
        }
    }
}

/// Parse a response body into suggestion items
///
/// The body must be a JSON array; individual items never fail to parse
/// (unrecognized shapes become [`SuggestionItem::Malformed`]).
pub fn parse_suggestions(body: &str) -> Result<Vec<SuggestionItem>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Receiver of rendered suggestions for one field
///
/// This is the surface a binder writes to. Implementations own the actual
/// widget or element that displays the options.
pub trait SuggestionList {
    /// Remove every option
    fn clear(&mut self);

    /// Append one option after the existing ones
    fn append(&mut self, option: RenderedOption);
}

/// Replace the contents of `list` with one option per item, in order
pub fn render_into<L: SuggestionList + ?Sized>(list: &mut L, items: &[SuggestionItem]) {
    list.clear();
    for item in items {
        list.append(RenderedOption::from(item));
    }
}

impl SuggestionList for Vec<RenderedOption> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, option: RenderedOption) {
        self.push(option);
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
