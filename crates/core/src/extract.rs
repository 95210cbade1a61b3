//! Bullet and speaker-notes extraction from section bodies.
//!
//! The bullet fallback policy is an explicit ranked strategy list: each
//! strategy maps a body to candidate bullet lines, and the first strategy
//! that yields anything wins.

use regex::Regex;
use std::sync::LazyLock;

/// Marker phrase introducing the on-slide bullet block.
const BULLET_BLOCK_MARKER: &str = "Tampilan slide";

/// How many leading body lines the last-resort strategy takes.
const MAX_FALLBACK_BULLETS: usize = 4;

/// Labeled bullet block: the marker through a colon, then everything up to
/// the next blank line.
static BULLET_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Tampilan slide.*?:\s*(.*?)\n\n").unwrap());

/// Speaker notes: the marker through a colon, then the rest of the body.
static NOTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Catatan pembicara.*?:\s*(.*)").unwrap());

/// Terminators that end a notes block: a horizontal rule or the next heading.
static NOTES_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"---|\n## |\n\n##").unwrap());

/// One bullet extraction strategy: section body in, bullet lines out.
type BulletStrategy = fn(&str) -> Vec<String>;

/// Ranked fallback chain, tried in order. First non-empty result wins.
const BULLET_STRATEGIES: &[(&str, BulletStrategy)] = &[
    ("labeled block", labeled_block_bullets),
    ("dash lines", dash_line_bullets),
    ("leading lines", leading_line_bullets),
];

/// Extract bullet lines from a section body.
///
/// Returns an empty list only when the body has no non-empty lines at all.
/// `title` is used purely for log context.
pub fn extract_bullets(body: &str, title: &str) -> Vec<String> {
    for (rank, (name, strategy)) in BULLET_STRATEGIES.iter().enumerate() {
        let bullets = strategy(body);

        if bullets.is_empty() {
            // Marker wording drift lands in a weaker tier; make that
            // visible instead of degrading silently.
            if rank == 0 && body.contains(BULLET_BLOCK_MARKER) {
                log::warn!(
                    "slide '{}': '{}' marker present but no bullet lines matched, falling back",
                    title,
                    BULLET_BLOCK_MARKER
                );
            }
            continue;
        }

        if rank > 0 {
            log::debug!("slide '{}': bullets via fallback strategy '{}'", title, name);
        }
        return bullets;
    }

    Vec::new()
}

/// Dash-prefixed lines inside the labeled bullet block, if one is present.
fn labeled_block_bullets(body: &str) -> Vec<String> {
    match BULLET_BLOCK_REGEX.captures(body) {
        Some(caps) => dash_line_bullets(caps.get(1).map_or("", |m| m.as_str())),
        None => Vec::new(),
    }
}

/// Dash-prefixed lines anywhere in the text, prefix stripped.
fn dash_line_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix("- "))
        .map(|rest| rest.trim().to_string())
        .collect()
}

/// Last resort: the first few non-empty lines, verbatim.
fn leading_line_bullets(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FALLBACK_BULLETS)
        .map(str::to_string)
        .collect()
}

/// Extract speaker notes from a section body.
///
/// Captures everything after the notes marker, truncated at the next
/// horizontal rule or heading, trimmed. `None` when the marker is absent
/// or the captured text is empty.
pub fn extract_notes(body: &str) -> Option<String> {
    let caps = NOTES_REGEX.captures(body)?;
    let raw = caps.get(1).map_or("", |m| m.as_str());
    let notes = NOTES_END_REGEX.split(raw).next().unwrap_or("").trim();

    if notes.is_empty() {
        None
    } else {
        Some(notes.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_block_bullets_win() {
        let body = "Hello\n\nTampilan slide (poin singkat):\n- A\n- B\n\nCatatan pembicara:\nSay hi.";
        assert_eq!(extract_bullets(body, "Intro"), vec!["A", "B"]);
    }

    #[test]
    fn test_labeled_block_requires_blank_line_terminator() {
        // No blank line after the block, so the labeled tier misses and the
        // dash-line tier picks the same lines up.
        let body = "Tampilan slide:\n- only\n- these";
        assert_eq!(extract_bullets(body, "t"), vec!["only", "these"]);
    }

    #[test]
    fn test_dash_lines_anywhere_without_marker() {
        let body = "intro text\n- first\nmiddle\n- second\n";
        assert_eq!(extract_bullets(body, "t"), vec!["first", "second"]);
    }

    #[test]
    fn test_marker_drift_falls_back_to_dash_lines() {
        // Marker wording changed; the labeled regex misses but dash lines
        // are still collected.
        let body = "Tampilan layar:\n- kept\n\nrest";
        assert_eq!(extract_bullets(body, "t"), vec!["kept"]);
    }

    #[test]
    fn test_leading_lines_fallback_caps_at_four() {
        let body = "one\ntwo\n\nthree\nfour\nfive\n";
        assert_eq!(extract_bullets(body, "t"), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_empty_body_yields_no_bullets() {
        assert!(extract_bullets("", "t").is_empty());
        assert!(extract_bullets("\n  \n", "t").is_empty());
    }

    #[test]
    fn test_notes_basic() {
        let body = "Tampilan slide:\n- A\n\nCatatan pembicara:\nSay hi.";
        assert_eq!(extract_notes(body).as_deref(), Some("Say hi."));
    }

    #[test]
    fn test_notes_multiline() {
        let body = "Catatan pembicara:\nFirst line.\nSecond line.";
        assert_eq!(extract_notes(body).as_deref(), Some("First line.\nSecond line."));
    }

    #[test]
    fn test_notes_truncated_at_rule() {
        let body = "Catatan pembicara:\nKeep this.\n---\nDrop this.";
        assert_eq!(extract_notes(body).as_deref(), Some("Keep this."));
    }

    #[test]
    fn test_notes_truncated_at_next_heading() {
        let body = "Catatan pembicara:\nKeep this.\n## Next\nDrop this.";
        assert_eq!(extract_notes(body).as_deref(), Some("Keep this."));
    }

    #[test]
    fn test_notes_absent() {
        assert_eq!(extract_notes("no markers here\n- A"), None);
    }

    #[test]
    fn test_notes_empty_after_marker() {
        assert_eq!(extract_notes("Catatan pembicara:\n   "), None);
        assert_eq!(extract_notes("Catatan pembicara:\n---\nrest"), None);
    }
}
