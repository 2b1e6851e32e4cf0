//! Per-field resolvers, each an ordered fallback chain.
//!
//! Chain order is the contract: structured summary values beat keyword
//! heuristics, which beat slug guesses. Every resolver is a pure function of
//! its inputs and bottoms out at the empty string.

use std::sync::LazyLock;

use regex::Regex;

use mockdex_core::languages::{canonical_names, is_alias_token, LANGUAGE_ALIASES};

use crate::dom::PageDoc;
use crate::slug::parse_slug;
use crate::summary::SummaryTable;

/// Strips the site-name tail from a `<title>`, e.g.
/// `"Two Sum | interviewing.io recorded mocks"` → `"Two Sum"`.
static TITLE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\|\s*interviewing\.io.*$").expect("static regex"));

/// Keyword literals that are never a company or topic.
const NOISE_KEYWORDS: [&str; 2] = ["faang", "interview"];

const SUMMARY_HEADING: &str = "Interview Summary";
const PROMPT_CLASS: &str = "whitespace-pre-wrap";
const MIN_PROMPT_LEN: usize = 20;
const MAX_COMPANY_KEYWORD_LEN: usize = 30;

/// Runs `strategies` in order and returns the first non-empty result, or ""
/// when every strategy comes up empty. Later strategies are not evaluated
/// once one succeeds.
fn first_non_empty(strategies: &[&dyn Fn() -> String]) -> String {
    strategies
        .iter()
        .map(|strategy| strategy())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Primary heading, else the page title with the site suffix stripped.
#[must_use]
pub fn resolve_title(doc: &PageDoc) -> String {
    first_non_empty(&[
        &|| doc.h1_text().unwrap_or_default(),
        &|| {
            doc.title_text()
                .map(|t| TITLE_SUFFIX.replace(&t, "").trim().to_string())
                .unwrap_or_default()
        },
    ])
}

/// The actual problem title, usually filed under "Problem type" in the
/// summary.
#[must_use]
pub fn resolve_problem_name(summary: &SummaryTable) -> String {
    summary
        .first_of(&["problem type", "problem", "question", "question name"])
        .unwrap_or_default()
        .to_string()
}

/// Explicit summary value when long enough to be a real prompt, else the
/// preserved-whitespace paragraph inside the summary section.
#[must_use]
pub fn resolve_prompt(doc: &PageDoc, summary: &SummaryTable) -> String {
    first_non_empty(&[
        &|| {
            ["interview question", "prompt"]
                .iter()
                .find_map(|key| {
                    summary
                        .get(key)
                        .filter(|v| v.chars().count() > MIN_PROMPT_LEN)
                })
                .unwrap_or_default()
                .to_string()
        },
        &|| {
            doc.section(SUMMARY_HEADING)
                .and_then(|s| s.paragraph_text_with_class(PROMPT_CLASS))
                .unwrap_or_default()
        },
    ])
}

/// Summary value mapped through the alias table, else a canonical-name scan
/// of the interview title, else the slug guess.
#[must_use]
pub fn resolve_language(summary: &SummaryTable, interview_title: &str, url: &str) -> String {
    first_non_empty(&[
        &|| language_from_summary(summary),
        &|| language_from_title(interview_title),
        &|| parse_slug(url).language,
    ])
}

fn language_from_summary(summary: &SummaryTable) -> String {
    let Some(raw) = summary.first_of(&["language", "programming language"]) else {
        return String::new();
    };
    // Normalize the common spelled-out form before the substring scan.
    let value = raw.to_lowercase().replace("c plus plus", "c++");
    for (token, canonical) in LANGUAGE_ALIASES {
        if value.contains(token) || value.contains(&canonical.to_lowercase()) {
            return (*canonical).to_string();
        }
    }
    // No alias matched; keep whatever the page said.
    raw.to_string()
}

fn language_from_title(interview_title: &str) -> String {
    let title = interview_title.to_lowercase();
    for canonical in canonical_names() {
        let name = canonical.to_lowercase();
        if title.starts_with(&name) || title.contains(&format!("{name} interview")) {
            return canonical.to_string();
        }
    }
    String::new()
}

/// Summary value, else the first plausible company keyword, else the slug
/// guess.
#[must_use]
pub fn resolve_company(summary: &SummaryTable, keywords: &[String], url: &str) -> String {
    first_non_empty(&[
        &|| {
            summary
                .first_of(&["company", "interviewer company"])
                .unwrap_or_default()
                .to_string()
        },
        &|| company_from_keywords(keywords),
        &|| parse_slug(url).company,
    ])
}

/// First keyword that looks like a company name: not a language alias or
/// noise literal, starts with an uppercase letter, reasonably short.
/// Best-effort only — the capitalization test has no guarantee of
/// correctness.
fn company_from_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .find(|k| {
            let lower = k.to_lowercase();
            !k.is_empty()
                && !is_alias_token(&lower)
                && !NOISE_KEYWORDS.contains(&lower.as_str())
                && k.chars().next().is_some_and(char::is_uppercase)
                && k.chars().count() <= MAX_COMPANY_KEYWORD_LEN
        })
        .cloned()
        .unwrap_or_default()
}

/// Keywords with language aliases and noise literals filtered out,
/// deduplicated preserving order and joined with `"; "`; else the slug's
/// topic remainder.
#[must_use]
pub fn resolve_topics(keywords: &[String], url: &str) -> String {
    let mut topics: Vec<&String> = Vec::new();
    for keyword in keywords {
        let lower = keyword.to_lowercase();
        if NOISE_KEYWORDS.contains(&lower.as_str()) || is_alias_token(&lower) {
            continue;
        }
        if !topics.contains(&keyword) {
            topics.push(keyword);
        }
    }
    if topics.is_empty() {
        parse_slug(url).topic
    } else {
        topics
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
