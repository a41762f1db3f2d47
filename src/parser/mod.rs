//! Line scanner for ATX headings
//!
//! Documents are split on `\n` so that rewriting can put every line back
//! exactly where it was. A heading is `#`, `##` or `###`, at least one
//! whitespace character, then text with something other than whitespace in
//! it. Deeper levels are treated as body text.

use crate::types::HeadingLevel;
use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(\S.*?)\s*$").expect("valid regex"));

static EXPLICIT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\{#([A-Za-z0-9_-]+)\}$").expect("valid regex"));

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{#([A-Za-z0-9_-]+)\}$").expect("valid regex"));

/// A heading line, borrowed from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    /// Heading depth
    pub level: HeadingLevel,
    /// Title text, trimmed, without any explicit `{#id}` marker
    pub title: &'a str,
    /// Identifier from a trailing `{#id}` marker
    pub explicit_id: Option<&'a str>,
    /// Byte offset in the line where the title text ends
    pub title_end: usize,
}

/// Parse one line (without its `\n`) as a heading.
///
/// With `honor_explicit_ids`, a trailing `{#id}` marker is split off the
/// title. A marker with nothing in front of it stays part of the title.
///
/// # Examples
/// ```
/// use mdtoc::parser::parse_heading_line;
/// use mdtoc::HeadingLevel;
///
/// let h = parse_heading_line("## Install {#setup}", true).unwrap();
/// assert_eq!(h.level, HeadingLevel::H2);
/// assert_eq!(h.title, "Install");
/// assert_eq!(h.explicit_id, Some("setup"));
///
/// assert!(parse_heading_line("#### Too deep", true).is_none());
/// assert!(parse_heading_line("#hashtag", true).is_none());
/// ```
pub fn parse_heading_line(line: &str, honor_explicit_ids: bool) -> Option<HeadingLine<'_>> {
    let caps = HEADING_RE.captures(line)?;
    let hashes = caps.get(1)?;
    let text = caps.get(2)?;
    let level = HeadingLevel::from_depth(hashes.as_str().len())?;

    if honor_explicit_ids
        && let Some(marker) = EXPLICIT_ID_RE.captures(text.as_str())
        && let (Some(title), Some(id)) = (marker.get(1), marker.get(2))
        && !title.as_str().is_empty()
    {
        return Some(HeadingLine {
            level,
            title: title.as_str(),
            explicit_id: Some(id.as_str()),
            title_end: text.start() + title.end(),
        });
    }

    Some(HeadingLine {
        level,
        title: text.as_str(),
        explicit_id: None,
        title_end: text.end(),
    })
}

/// Trailing `{#id}` marker on a line, if any.
pub fn trailing_marker(line: &str) -> Option<&str> {
    MARKER_RE
        .captures(line.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check if a trimmed line starts a code fence (``` or ~~~)
#[inline]
pub fn is_code_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// One line of a scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// Zero-based line index
    pub index: usize,
    /// Line text without the `\n` (a `\r` is kept)
    pub text: &'a str,
    /// Parsed heading, if the line is one
    pub heading: Option<HeadingLine<'a>>,
}

/// Iterator over the lines of a document, recognising headings.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    skip_code_fences: bool,
    honor_explicit_ids: bool,
    in_code_block: bool,
}

impl<'a> LineScanner<'a> {
    /// Scan `content` line by line
    pub fn new(content: &'a str, skip_code_fences: bool, honor_explicit_ids: bool) -> Self {
        Self {
            lines: content.split('\n').enumerate(),
            skip_code_fences,
            honor_explicit_ids,
            in_code_block: false,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, text) = self.lines.next()?;

        if self.skip_code_fences {
            if is_code_fence(text.trim()) {
                self.in_code_block = !self.in_code_block;
                return Some(ScannedLine {
                    index,
                    text,
                    heading: None,
                });
            }
            if self.in_code_block {
                return Some(ScannedLine {
                    index,
                    text,
                    heading: None,
                });
            }
        }

        Some(ScannedLine {
            index,
            text,
            heading: parse_heading_line(text, self.honor_explicit_ids),
        })
    }
}
