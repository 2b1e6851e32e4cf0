//! Last-resort field guesses derived from the URL slug alone.
//!
//! Interview slugs encode `<company>-<language>-<topic words…>`, e.g.
//! `airbnb-python-alien-dictionary`. This parser is the final fallback for
//! company, language, and topics when no structured data is present on the
//! page; it never fails, it only degrades to empty guesses.

use mockdex_core::languages::canonical_for_token;

use crate::links::last_path_segment;
use crate::text::clean_text;

/// Best-effort guesses parsed from a slug. All fields may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugGuess {
    pub company: String,
    pub language: String,
    pub topic: String,
}

/// Parses the URL's final path segment into company/language/topic guesses.
///
/// Token 0 is the company (title-cased; the literal `faang` upper-cased).
/// Token 1 is looked up in the alias table; on a miss, tokens 1–2 joined with
/// `-` are retried to cover multi-token language names. The topic is the
/// remaining tokens joined with spaces.
#[must_use]
pub fn parse_slug(url: &str) -> SlugGuess {
    let slug = last_path_segment(url);
    let parts: Vec<&str> = slug.split('-').collect();

    let company = parts
        .first()
        .map(|p| {
            if p.eq_ignore_ascii_case("faang") {
                p.to_uppercase()
            } else {
                title_case(p)
            }
        })
        .unwrap_or_default();

    let mut language = String::new();
    if parts.len() >= 2 {
        if let Some(canonical) = canonical_for_token(&parts[1].to_lowercase()) {
            language = canonical.to_string();
        }
    }

    let joined = if parts.len() >= 3 {
        parts[1..3].join("-").to_lowercase()
    } else {
        String::new()
    };
    if language.is_empty() && !joined.is_empty() {
        if let Some(canonical) = canonical_for_token(&joined) {
            language = canonical.to_string();
        }
    }

    // Topic starts after the company and the language token; when the
    // two-token join matched, both joined tokens belong to the language.
    let topic_start = if parts.len() >= 3 && canonical_for_token(&joined).is_some() {
        3
    } else {
        2
    };
    let topic = if parts.len() > topic_start {
        clean_text(&parts[topic_start..].join(" "))
    } else {
        String::new()
    };

    SlugGuess {
        company,
        language,
        topic,
    }
}

/// Uppercases the first character and lowercases the rest.
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
