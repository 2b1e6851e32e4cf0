//! Candidate-URL filtering and interview id derivation.

use std::collections::BTreeSet;

use url::Url;

/// Keeps only URLs that point at actual interview pages: `/mocks/<slug>`.
///
/// Drops blanks, the `/mocks` index itself, anything outside `/mocks/`, and
/// all system-design / behavioral interviews. The result is deduplicated and
/// sorted lexicographically, so runs are deterministic regardless of input
/// order.
#[must_use]
pub fn filter_links<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut valid: BTreeSet<String> = BTreeSet::new();

    for url in urls {
        let url = url.as_ref().trim();
        if url.is_empty() || !url.contains("mocks") {
            continue;
        }
        if url.contains("system-design") || url.contains("behavioral") {
            continue;
        }

        let Ok(parsed) = Url::parse(url) else {
            continue;
        };
        let path = parsed.path().trim_end_matches('/');
        if path == "/mocks" || !path.starts_with("/mocks/") {
            continue;
        }
        // "/mocks/<slug>" splits into at least ["", "mocks", "<slug>"].
        if path.split('/').count() < 3 {
            continue;
        }

        valid.insert(url.to_string());
    }

    valid.into_iter().collect()
}

/// Derives a filesystem-safe id from the URL's final path segment.
///
/// Characters outside `[A-Za-z0-9_.-]` are replaced with `_`; an empty slug
/// falls back to a literal placeholder.
#[must_use]
pub fn interview_id_from_url(url: &str) -> String {
    let slug = last_path_segment(url);
    let id: String = slug
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if id.is_empty() {
        "interview".to_string()
    } else {
        id
    }
}

/// The URL's last path segment with any trailing slash stripped; "" when the
/// URL does not parse or has an empty path.
#[must_use]
pub(crate) fn last_path_segment(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    parsed
        .path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_real_interview_pages() {
        let input = [
            "https://x/mocks",
            "https://x/mocks/abc-def",
            "https://x/mocks/system-design/xyz",
        ];
        assert_eq!(filter_links(&input), vec!["https://x/mocks/abc-def"]);
    }

    #[test]
    fn excludes_behavioral_and_index_variants() {
        let input = [
            "https://x/mocks/",
            "https://x/mocks/behavioral-amazon-leadership",
            "https://x/other/page",
            "",
            "https://x/mocks/google-java-two-sum",
        ];
        assert_eq!(
            filter_links(&input),
            vec!["https://x/mocks/google-java-two-sum"]
        );
    }

    #[test]
    fn output_is_deduplicated_and_sorted() {
        let input = [
            "https://x/mocks/zeta-python-two-sum",
            "https://x/mocks/alpha-java-lru-cache",
            "https://x/mocks/zeta-python-two-sum",
        ];
        assert_eq!(
            filter_links(&input),
            vec![
                "https://x/mocks/alpha-java-lru-cache",
                "https://x/mocks/zeta-python-two-sum",
            ]
        );
    }

    #[test]
    fn output_is_subset_of_input() {
        let input = [
            "https://x/mocks/a-b-c",
            "https://x/mocks/d-e-f",
            "not a url",
        ];
        let output = filter_links(&input);
        for url in &output {
            assert!(input.iter().any(|i| i == url));
        }
    }

    #[test]
    fn unparseable_urls_are_dropped() {
        let input = ["::::", "https://x/mocks/a-b-c"];
        assert_eq!(filter_links(&input), vec!["https://x/mocks/a-b-c"]);
    }

    #[test]
    fn mocks_must_be_the_leading_path_segment() {
        let input = ["https://x/blog/mocks/abc-def"];
        assert!(filter_links(&input).is_empty());
    }

    #[test]
    fn id_from_url_is_the_sanitized_slug() {
        assert_eq!(
            interview_id_from_url("https://x/mocks/airbnb-python-alien-dictionary"),
            "airbnb-python-alien-dictionary"
        );
        assert_eq!(
            interview_id_from_url("https://x/mocks/a%20b/"),
            "a_20b"
        );
    }

    #[test]
    fn id_from_url_empty_slug_uses_placeholder() {
        assert_eq!(interview_id_from_url("https://x/"), "interview");
        assert_eq!(interview_id_from_url("not a url"), "interview");
    }

    #[test]
    fn last_path_segment_strips_trailing_slash() {
        assert_eq!(
            last_path_segment("https://x/mocks/abc-def/"),
            "abc-def"
        );
        assert_eq!(last_path_segment("https://x/"), "");
    }
}
