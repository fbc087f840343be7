//! Regex-based helpers for the constrained rich-text HTML subset.
//!
//! These are not a general HTML parser. They cover the markup the commerce
//! platform's rich-text editor produces: paragraphs, line breaks, inline
//! spans and `&nbsp;` entities.

use std::sync::LazyLock;

use regex::Regex;

/// `<br>`, `<br/>` and `<br />` in any case.
static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid regex"));

/// Opening or closing paragraph tag, with or without attributes.
static PARAGRAPH_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*|/)?>").expect("Invalid regex"));

/// Closing paragraph tag.
static PARAGRAPH_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("Invalid regex"));

/// Any tag.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

/// Runs of whitespace.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

const NBSP: &str = "&nbsp;";

/// Replace line-break tags with `\n`.
pub(super) fn normalize_line_breaks(html: &str) -> String {
    LINE_BREAK_RE.replace_all(html, "\n").into_owned()
}

/// Split on paragraph boundaries, trimming each fragment and dropping
/// fragments that hold nothing but whitespace and `&nbsp;`.
pub(super) fn paragraph_fragments(html: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_TAG_RE
        .split(html)
        .map(str::trim)
        .filter(|fragment| !fragment.replace(NBSP, "").trim().is_empty())
}

/// Visible text of a fragment: tags removed, `&nbsp;` as a space, trimmed.
pub(super) fn plain_text(fragment: &str) -> String {
    TAG_RE
        .replace_all(fragment, "")
        .replace(NBSP, " ")
        .trim()
        .to_owned()
}

/// Turn paragraphs into lines and drop every other tag.
///
/// Consecutive line breaks collapse into one and lines are trimmed.
pub(super) fn paragraphs_to_lines(html: &str) -> String {
    let with_breaks = PARAGRAPH_CLOSE_RE.replace_all(html, "\n");
    let text = TAG_RE.replace_all(&with_breaks, "");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse every whitespace run (newlines included) into a single space.
pub(super) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_owned()
}
