//! The six fixed interview-rating categories and the label rules that
//! target them.
//!
//! Feedback rows are matched by substring against [`SCORE_RULES`] in order;
//! the first matching rule decides which slot a row fills. Unmatched wording
//! silently leaves a slot empty rather than erroring, so a change in the
//! source site's prompt text means editing one table entry here.

use serde::Serialize;

/// One of the six fixed rating slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSlot {
    ExcitedToWorkWithThem,
    QuestionsQuality,
    InterviewerHelpfulness,
    ProblemSolving,
    TechnicalSkills,
    Communication,
}

/// Ordered `(label substring, slot)` rules for feedback rows. The label is
/// matched lowercased and whitespace-collapsed.
pub const SCORE_RULES: &[(&str, ScoreSlot)] = &[
    ("excited", ScoreSlot::ExcitedToWorkWithThem),
    ("good were the questions", ScoreSlot::QuestionsQuality),
    ("helpful was your interviewer", ScoreSlot::InterviewerHelpfulness),
    ("problem solving", ScoreSlot::ProblemSolving),
    ("technical skills", ScoreSlot::TechnicalSkills),
    ("communication", ScoreSlot::Communication),
];

/// Label substring that marks the outcome row ("would you advance…").
pub const OUTCOME_LABEL: &str = "advance this person to the next round";

/// Marker that a feedback value is a 1–4 rating (e.g. `"3/4"`).
pub const RATING_MARKER: &str = "/4";

/// Six named slots, each either empty or a literal `"n/4"` string. Slots are
/// independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSet {
    pub excited_to_work_with_them: String,
    pub questions_quality: String,
    pub interviewer_helpfulness: String,
    pub problem_solving: String,
    pub technical_skills: String,
    pub communication: String,
}

impl ScoreSet {
    /// Stores `value` in the given slot, overwriting any previous value.
    pub fn set(&mut self, slot: ScoreSlot, value: String) {
        match slot {
            ScoreSlot::ExcitedToWorkWithThem => self.excited_to_work_with_them = value,
            ScoreSlot::QuestionsQuality => self.questions_quality = value,
            ScoreSlot::InterviewerHelpfulness => self.interviewer_helpfulness = value,
            ScoreSlot::ProblemSolving => self.problem_solving = value,
            ScoreSlot::TechnicalSkills => self.technical_skills = value,
            ScoreSlot::Communication => self.communication = value,
        }
    }

    /// Returns the first rule in [`SCORE_RULES`] whose substring appears in
    /// the normalized label, if any.
    #[must_use]
    pub fn slot_for_label(label: &str) -> Option<ScoreSlot> {
        SCORE_RULES
            .iter()
            .find(|(needle, _)| label.contains(needle))
            .map(|(_, slot)| *slot)
    }
}
