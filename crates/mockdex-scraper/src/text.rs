//! Whitespace normalization shared by every extractor.

/// Collapses all runs of whitespace to single spaces and trims the ends.
#[must_use]
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`clean_text`] plus lowercasing; used for label keys and substring
/// matching.
#[must_use]
pub fn normalize(s: &str) -> String {
    clean_text(s).to_lowercase()
}
