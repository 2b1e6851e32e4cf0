//! Document-query layer over the parsed HTML.
//!
//! All heuristic markup matching lives here: heading-substring section
//! lookup, class-substring element matching, label/value row splitting. The
//! extractors above this module only see cleaned strings and small structs,
//! so the matching strategy can be swapped or hardened without touching
//! extraction logic.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::text::{clean_text, normalize};

static H1: LazyLock<Selector> = LazyLock::new(|| sel("h1"));
static H3: LazyLock<Selector> = LazyLock::new(|| sel("h3"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| sel("title"));
static DIV: LazyLock<Selector> = LazyLock::new(|| sel("div"));
static P: LazyLock<Selector> = LazyLock::new(|| sel("p"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| sel("span"));
static JSON_LD: LazyLock<Selector> = LazyLock::new(|| sel(r#"script[type="application/ld+json"]"#));

fn sel(css: &str) -> Selector {
    // Only called with the static selectors above, all known-valid.
    Selector::parse(css).expect("static selector must parse")
}

fn class_contains(el: ElementRef<'_>, needle: &str) -> bool {
    el.value().attr("class").is_some_and(|c| c.contains(needle))
}

fn element_text(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// A parsed interview page.
pub struct PageDoc {
    html: Html,
}

impl PageDoc {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Finds the logical section whose `<h3>` heading contains `heading`
    /// (case-insensitive substring match) and returns its nearest `<div>`
    /// ancestor. Only the first matching heading is considered.
    #[must_use]
    pub fn section(&self, heading: &str) -> Option<Section<'_>> {
        let needle = normalize(heading);
        let h3 = self
            .html
            .select(&H3)
            .find(|h| normalize(&element_text(*h)).contains(&needle))?;
        let root = h3
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|a| a.value().name() == "div")?;
        Some(Section { root })
    }

    /// Cleaned text of the first `<h1>`, if any.
    #[must_use]
    pub fn h1_text(&self) -> Option<String> {
        self.html
            .select(&H1)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    }

    /// Cleaned text of the document `<title>`, if any.
    #[must_use]
    pub fn title_text(&self) -> Option<String> {
        self.html
            .select(&TITLE)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    }

    /// Raw contents of every embedded `application/ld+json` metadata block,
    /// in document order.
    #[must_use]
    pub fn json_ld_texts(&self) -> Vec<String> {
        self.html
            .select(&JSON_LD)
            .map(|s| s.text().collect::<String>().trim().to_string())
            .collect()
    }
}

/// One logical page section (Summary, Feedback or Transcript), rooted at the
/// `<div>` enclosing its heading.
pub struct Section<'a> {
    root: ElementRef<'a>,
}

impl<'a> Section<'a> {
    /// Cleaned text of every `<p>` descendant, in document order. Empty
    /// paragraphs are kept so adjacent-pair scanning sees the real layout.
    #[must_use]
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.root.select(&P).map(element_text).collect()
    }

    /// Cleaned text of the first `<p>` whose class attribute contains
    /// `class_substr`.
    #[must_use]
    pub fn paragraph_text_with_class(&self, class_substr: &str) -> Option<String> {
        self.root
            .select(&P)
            .find(|p| class_contains(*p, class_substr))
            .map(element_text)
    }

    /// Splits each row-like `<div>` (class contains `class_substr`) into a
    /// `(label, value)` pair: label is the normalized text of the row's first
    /// inner `<div>`, value the cleaned text of its last. Rows with fewer
    /// than two inner divs are skipped.
    #[must_use]
    pub fn label_value_rows(&self, class_substr: &str) -> Vec<(String, String)> {
        self.divs_with_class(class_substr)
            .into_iter()
            .filter_map(|row| {
                let cells: Vec<ElementRef<'a>> = row
                    .select(&DIV)
                    .filter(|d| d.id() != row.id())
                    .collect();
                if cells.len() < 2 {
                    return None;
                }
                let label = normalize(&element_text(cells[0]));
                let value = element_text(cells[cells.len() - 1]);
                Some((label, value))
            })
            .collect()
    }

    /// All `<div>` descendants whose class contains `class_substr`, wrapped
    /// as [`Block`]s, in document order.
    #[must_use]
    pub fn blocks_with_class(&self, class_substr: &str) -> Vec<Block<'a>> {
        self.divs_with_class(class_substr)
            .into_iter()
            .map(|el| Block { el })
            .collect()
    }

    fn divs_with_class(&self, class_substr: &str) -> Vec<ElementRef<'a>> {
        self.root
            .select(&DIV)
            .filter(|d| class_contains(*d, class_substr))
            .collect()
    }
}

/// One per-utterance transcript block.
pub struct Block<'a> {
    el: ElementRef<'a>,
}

impl Block<'_> {
    /// Cleaned text of the first `<span>` descendant whose class contains
    /// `class_substr`.
    #[must_use]
    pub fn span_text_with_class(&self, class_substr: &str) -> Option<String> {
        self.el
            .select(&SPAN)
            .find(|s| class_contains(*s, class_substr))
            .map(element_text)
    }

    /// Cleaned text of the whole block.
    #[must_use]
    pub fn text(&self) -> String {
        element_text(self.el)
    }
}
