//! Outcome and rating extraction from the "Interview Feedback" section.

use mockdex_core::scores::{ScoreSet, OUTCOME_LABEL, RATING_MARKER};

use crate::dom::PageDoc;

const FEEDBACK_HEADING: &str = "Interview Feedback";

/// Structural class signature shared by feedback rows.
const ROW_CLASS: &str = "flex w-full py-4";

/// Extracts the advance-to-next-round outcome and the six rating slots.
///
/// Each row independently targets at most one slot: a row whose label names
/// the outcome question sets the outcome; otherwise a row whose value looks
/// like a rating (`"n/4"`) fills the first slot whose rule substring appears
/// in the label. Rows matching nothing are ignored, as is the whole section
/// when absent — both resolve to empty strings, never an error.
#[must_use]
pub fn extract_outcome_and_scores(doc: &PageDoc) -> (String, ScoreSet) {
    let mut outcome = String::new();
    let mut scores = ScoreSet::default();

    let Some(section) = doc.section(FEEDBACK_HEADING) else {
        return (outcome, scores);
    };

    for (label, value) in section.label_value_rows(ROW_CLASS) {
        if label.contains(OUTCOME_LABEL) {
            outcome = value;
        } else if value.contains(RATING_MARKER) {
            if let Some(slot) = ScoreSet::slot_for_label(&label) {
                scores.set(slot, value);
            }
        }
    }

    (outcome, scores)
}
