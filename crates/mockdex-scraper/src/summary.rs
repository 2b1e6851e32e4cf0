//! Label→value lookup parsed from a page's "Interview Summary" section.

use std::collections::HashMap;

use crate::dom::PageDoc;
use crate::text::normalize;

/// Heading substring identifying the summary section.
const SUMMARY_HEADING: &str = "Interview Summary";

/// Labels are short; anything longer is value text that leaked into the
/// label position.
const MAX_LABEL_LEN: usize = 40;

/// Normalized label → cleaned value, built once per page.
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    entries: HashMap<String, String>,
}

impl SummaryTable {
    /// Scans the summary section's paragraphs pairwise: each adjacent
    /// (label, value) pair is recorded when the label is plausibly short and
    /// the value non-empty. The first write per key wins — a value mistaken
    /// for a label in the next pair cannot clobber an earlier entry.
    ///
    /// Returns an empty table when the section is absent.
    #[must_use]
    pub fn build(doc: &PageDoc) -> Self {
        let Some(section) = doc.section(SUMMARY_HEADING) else {
            return Self::default();
        };

        let paragraphs = section.paragraph_texts();
        let mut entries: HashMap<String, String> = HashMap::new();

        for pair in paragraphs.windows(2) {
            let label = &pair[0];
            let value = &pair[1];
            if label.is_empty() || label.chars().count() > MAX_LABEL_LEN || value.is_empty() {
                continue;
            }
            let key = normalize(label);
            entries.entry(key).or_insert_with(|| value.clone());
        }

        Self { entries }
    }

    /// Looks up a value by its normalized label.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// First value found under `keys`, tried in order.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
