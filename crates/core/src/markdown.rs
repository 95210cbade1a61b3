//! Markdown segmentation for slide decks.
//!
//! Splits a presentation Markdown document into per-slide sections on
//! top-level `## ` headings and separates each section into a title line
//! and a body block.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Matches a slide heading marker at the start of a line.
static HEADING_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##\s+").unwrap());

/// A heading-delimited span of the source document, one per future slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Trimmed first line of the span.
    pub title: String,

    /// Remaining text of the span, trimmed as a block. May be empty.
    pub body: String,
}

impl Section {
    /// Separate a section span into title (first line) and body (the rest).
    fn from_span(span: &str) -> Self {
        let mut lines = span.lines();
        let title = lines.next().unwrap_or("").trim().to_string();
        let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        Self { title, body }
    }
}

/// Normalize source text before segmentation.
///
/// Folds CRLF/CR line endings to LF so blank-line detection works on
/// Windows-authored documents, and applies Unicode NFC so composed and
/// decomposed input produce identical slide text.
pub fn normalize_source(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").nfc().collect()
}

/// Split normalized source text into sections on top-level headings.
///
/// Text before the first heading is discarded. Sections whose trimmed text
/// is empty are dropped. A document without headings yields no sections.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut fragments = HEADING_SPLIT_REGEX.split(text);

    // The fragment before the first heading (empty when the document opens
    // with one) never becomes a slide.
    fragments.next();

    fragments
        .map(str::trim)
        .filter(|span| !span.is_empty())
        .map(Section::from_span)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_counts_sections_in_order() {
        let md = "## One\nalpha\n\n## Two\nbeta\n\n## Three\ngamma\n";
        let sections = split_sections(md);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "One");
        assert_eq!(sections[1].title, "Two");
        assert_eq!(sections[2].title, "Three");
    }

    #[test]
    fn test_split_discards_preface() {
        let md = "Preface paragraph before any slide.\n\n## First\ncontent\n";
        let sections = split_sections(md);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "First");
    }

    #[test]
    fn test_split_drops_empty_sections() {
        let md = "## Real\ncontent\n\n##   \n\n";
        let sections = split_sections(md);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Real");
    }

    #[test]
    fn test_no_headings_yields_no_sections() {
        assert!(split_sections("just a paragraph\nwith lines\n").is_empty());
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn test_title_and_body_separation() {
        let sections = split_sections("##  Spaced Title  \nline one\nline two\n");
        assert_eq!(sections[0].title, "Spaced Title");
        assert_eq!(sections[0].body, "line one\nline two");
    }

    #[test]
    fn test_single_line_section_has_empty_body() {
        let sections = split_sections("## Lonely\n");
        assert_eq!(sections[0].title, "Lonely");
        assert_eq!(sections[0].body, "");
    }

    #[test]
    fn test_normalize_folds_crlf() {
        let text = normalize_source("## A\r\nbody\r\n\r\nmore\r\n");
        assert_eq!(text, "## A\nbody\n\nmore\n");
    }

    #[test]
    fn test_normalize_applies_nfc() {
        // "e" + combining acute accent composes to a single scalar.
        let text = normalize_source("Cafe\u{0301}");
        assert_eq!(text, "Caf\u{00e9}");
    }
}
