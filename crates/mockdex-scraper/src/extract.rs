//! Assembles one [`InterviewRecord`] from a fetched page.

use mockdex_core::InterviewRecord;

use crate::dom::PageDoc;
use crate::feedback::extract_outcome_and_scores;
use crate::fields::{
    resolve_company, resolve_language, resolve_problem_name, resolve_prompt, resolve_title,
    resolve_topics,
};
use crate::keywords::extract_keywords;
use crate::links::interview_id_from_url;
use crate::summary::SummaryTable;
use crate::transcript::flatten_transcript;

/// Runs the full extraction pipeline over a page's HTML and returns the
/// assembled row.
///
/// Total by construction: every extractor degrades to the empty string, so a
/// sparse or oddly structured page still yields a complete 16-column record.
#[must_use]
pub fn extract_record(html: &str, url: &str) -> InterviewRecord {
    let doc = PageDoc::parse(html);

    let summary = SummaryTable::build(&doc);
    let keywords = extract_keywords(&doc);

    let interview_title = resolve_title(&doc);
    let (outcome, scores) = extract_outcome_and_scores(&doc);

    let mut record = InterviewRecord {
        interview_id: interview_id_from_url(url),
        source_url: url.to_string(),
        problem_name: resolve_problem_name(&summary),
        language: resolve_language(&summary, &interview_title, url),
        company: resolve_company(&summary, &keywords, url),
        topics: resolve_topics(&keywords, url),
        advance_to_next_round: outcome,
        interview_prompt: resolve_prompt(&doc, &summary),
        transcript: flatten_transcript(&doc),
        interview_title,
        ..InterviewRecord::default()
    };
    record.apply_scores(scores);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://x/mocks/airbnb-python-alien-dictionary";

    const FULL_PAGE: &str = r#"
        <html>
          <head>
            <title>Alien Dictionary Mock | interviewing.io</title>
            <script type="application/ld+json">
              {"keywords": "Airbnb, python, graphs, topological sort"}
            </script>
          </head>
          <body>
            <h1>Python Interview with an Airbnb engineer</h1>
            <div>
              <h3>Interview Summary</h3>
              <p>Problem type</p>
              <p>Alien Dictionary</p>
              <p>Language</p>
              <p>Python</p>
              <p class="whitespace-pre-wrap">Given a sorted dictionary of an alien language, derive the character order.</p>
            </div>
            <div>
              <h3>Interview Feedback</h3>
              <div class="flex w-full py-4"><div>Would you advance this person to the next round?</div><div>Yes</div></div>
              <div class="flex w-full py-4"><div>How good were the questions?</div><div>3/4</div></div>
              <div class="flex w-full py-4"><div>Technical skills</div><div>4/4</div></div>
            </div>
            <div>
              <h3>Interview Transcript</h3>
              <div class="whitespace-pre-wrap"><span class="fontBold">Interviewer:</span><span class="italic">: Tell me about your approach.</span></div>
              <div class="whitespace-pre-wrap"><span class="fontBold">Interviewee</span><span class="italic">I would build a graph first.</span></div>
            </div>
          </body>
        </html>
    "#;

    #[test]
    fn full_page_fills_every_resolvable_field() {
        let record = extract_record(FULL_PAGE, URL);
        assert_eq!(record.interview_id, "airbnb-python-alien-dictionary");
        assert_eq!(record.source_url, URL);
        assert_eq!(
            record.interview_title,
            "Python Interview with an Airbnb engineer"
        );
        assert_eq!(record.problem_name, "Alien Dictionary");
        assert_eq!(record.language, "Python");
        assert_eq!(record.company, "Airbnb");
        assert_eq!(record.topics, "Airbnb; graphs; topological sort");
        assert_eq!(record.advance_to_next_round, "Yes");
        assert_eq!(record.score_questions_quality, "3/4");
        assert_eq!(record.score_technical_skills, "4/4");
        assert!(record.score_communication.is_empty());
        assert!(record
            .interview_prompt
            .starts_with("Given a sorted dictionary"));
        assert_eq!(
            record.transcript,
            "Interviewer: Tell me about your approach. Interviewee: I would build a graph first."
        );
    }

    #[test]
    fn page_missing_feedback_section_yields_empty_outcome_and_scores() {
        let html = "<html><body><h1>Sparse page</h1></body></html>";
        let record = extract_record(html, URL);
        assert_eq!(record.advance_to_next_round, "");
        assert_eq!(record.score_excited_to_work_with_them, "");
        assert_eq!(record.score_questions_quality, "");
        assert_eq!(record.score_interviewer_helpfulness, "");
        assert_eq!(record.score_problem_solving, "");
        assert_eq!(record.score_technical_skills, "");
        assert_eq!(record.score_communication, "");
    }

    #[test]
    fn sparse_page_still_fills_slug_derived_fields() {
        let html = "<html><body></body></html>";
        let record = extract_record(html, URL);
        assert_eq!(record.interview_id, "airbnb-python-alien-dictionary");
        assert_eq!(record.language, "Python");
        assert_eq!(record.company, "Airbnb");
        assert_eq!(record.topics, "alien dictionary");
        assert_eq!(record.interview_title, "");
        assert_eq!(record.transcript, "");
    }
}
