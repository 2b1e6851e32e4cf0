//! Keyword lists from embedded JSON-LD metadata blocks.
//!
//! The source site embeds these inconsistently, so keywords are only ever a
//! helper signal for the company and topics resolvers, never authoritative.

use serde_json::Value;

use crate::dom::PageDoc;

/// Returns the first non-empty keyword list found across the page's JSON-LD
/// blocks, in document order.
///
/// A block whose body is not valid JSON is skipped, not fatal. The
/// `keywords` field may be a comma-separated string or a list; entries are
/// stringified and trimmed, empties dropped.
#[must_use]
pub fn extract_keywords(doc: &PageDoc) -> Vec<String> {
    for raw in doc.json_ld_texts() {
        let value = match serde_json::from_str::<Value>(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "skipping malformed metadata block");
                continue;
            }
        };
        let keywords = keywords_from_value(value.get("keywords"));
        if !keywords.is_empty() {
            return keywords;
        }
    }
    Vec::new()
}

fn keywords_from_value(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(ToString::to_string)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string().trim().to_string(),
            })
            .filter(|k| !k.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
