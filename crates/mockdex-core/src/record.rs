//! The canonical output row.

use serde::Serialize;

use crate::scores::ScoreSet;

/// Column names in output order. The CSV header must match this exactly.
pub const COLUMNS: [&str; 16] = [
    "interview_id",
    "source_url",
    "interview_title",
    "problem_name",
    "language",
    "company",
    "topics",
    "advance_to_next_round",
    "score_excited_to_work_with_them",
    "score_questions_quality",
    "score_interviewer_helpfulness",
    "score_problem_solving",
    "score_technical_skills",
    "score_communication",
    "interview_prompt",
    "transcript",
];

/// One fully assembled interview row.
///
/// Every field is a `String`; absence is always the empty string, never a
/// missing column, so all output rows have an identical shape. Field
/// declaration order matches [`COLUMNS`] — the `csv` writer derives the
/// header from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterviewRecord {
    pub interview_id: String,
    pub source_url: String,
    pub interview_title: String,
    pub problem_name: String,
    pub language: String,
    pub company: String,
    pub topics: String,
    pub advance_to_next_round: String,
    pub score_excited_to_work_with_them: String,
    pub score_questions_quality: String,
    pub score_interviewer_helpfulness: String,
    pub score_problem_solving: String,
    pub score_technical_skills: String,
    pub score_communication: String,
    pub interview_prompt: String,
    pub transcript: String,
}

impl InterviewRecord {
    /// Copies the six rating slots into their record columns.
    pub fn apply_scores(&mut self, scores: ScoreSet) {
        self.score_excited_to_work_with_them = scores.excited_to_work_with_them;
        self.score_questions_quality = scores.questions_quality;
        self.score_interviewer_helpfulness = scores.interviewer_helpfulness;
        self.score_problem_solving = scores.problem_solving;
        self.score_technical_skills = scores.technical_skills;
        self.score_communication = scores.communication;
    }
}
