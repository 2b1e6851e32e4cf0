//! Static alias table mapping raw language tokens to canonical display names.
//!
//! Declaration order is part of the contract: substring-based resolvers scan
//! the table top to bottom and take the first hit, so more specific tokens
//! must precede the generic ones they contain (e.g. `c-plus-plus` before
//! `cpp`, `java` before the `javascript` value would shadow it).

/// Ordered `(token, canonical)` pairs. Tokens are lowercase as they appear in
/// URL slugs and summary values.
pub const LANGUAGE_ALIASES: &[(&str, &str)] = &[
    ("c-plus-plus", "C++"),
    ("cplusplus", "C++"),
    ("cpp", "C++"),
    ("python", "Python"),
    ("java", "Java"),
    ("go", "Go"),
    ("golang", "Go"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("csharp", "C#"),
    ("c#", "C#"),
    ("ruby", "Ruby"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("rust", "Rust"),
    ("php", "PHP"),
];

/// Looks up the canonical display name for an exact lowercase token.
#[must_use]
pub fn canonical_for_token(token: &str) -> Option<&'static str> {
    LANGUAGE_ALIASES
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, c)| *c)
}

/// Returns `true` if `token` (already lowercased) is a known alias token.
#[must_use]
pub fn is_alias_token(token: &str) -> bool {
    LANGUAGE_ALIASES.iter().any(|(t, _)| *t == token)
}

/// Canonical display names in declaration order, duplicates removed.
///
/// Used by resolvers that scan names against free text; the fixed order keeps
/// those scans deterministic.
#[must_use]
pub fn canonical_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for &(_, canonical) in LANGUAGE_ALIASES {
        if !names.contains(&canonical) {
            names.push(canonical);
        }
    }
    names
}
