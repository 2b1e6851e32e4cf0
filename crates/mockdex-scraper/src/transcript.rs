//! Flattens the "Interview Transcript" section to one normalized line.

use crate::dom::PageDoc;
use crate::text::clean_text;

const TRANSCRIPT_HEADING: &str = "Interview Transcript";

/// Per-utterance blocks carry the preserved-whitespace class.
const BLOCK_CLASS: &str = "whitespace-pre-wrap";
/// Speaker names are rendered in a bold-weight span.
const SPEAKER_CLASS: &str = "Bold";
/// Utterance text is rendered in an italic span.
const UTTERANCE_CLASS: &str = "italic";

/// Produces a single-line `"Speaker: text Speaker: text …"` transcript in
/// block order, or `""` when the section is absent.
///
/// A block missing its bold or italic span falls back to the block's full
/// text as the utterance. Speakers lose a trailing colon and utterances a
/// leading one, so markup that renders "speaker: : text" flattens cleanly.
/// Blocks yielding neither a speaker nor text are skipped.
#[must_use]
pub fn flatten_transcript(doc: &PageDoc) -> String {
    let Some(section) = doc.section(TRANSCRIPT_HEADING) else {
        return String::new();
    };

    let mut fragments: Vec<String> = Vec::new();
    for block in section.blocks_with_class(BLOCK_CLASS) {
        let speaker = block
            .span_text_with_class(SPEAKER_CLASS)
            .unwrap_or_default();
        let text = block
            .span_text_with_class(UTTERANCE_CLASS)
            .unwrap_or_else(|| block.text());

        let speaker = speaker.trim_end_matches(':').trim();
        let text = text.trim_start_matches(':').trim();

        if !speaker.is_empty() && !text.is_empty() {
            fragments.push(format!("{speaker}: {text}"));
        } else if !text.is_empty() {
            fragments.push(text.to_string());
        }
    }

    clean_text(&fragments.join(" "))
}
