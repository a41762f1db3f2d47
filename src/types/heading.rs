//! Heading entries produced by extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of an extracted heading. Only the first three ATX levels are
/// recognised; `####` and deeper lines are body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    /// `#`
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
}

impl HeadingLevel {
    /// Build a level from a count of leading `#` characters.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Number of `#` characters for this level.
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        HeadingLevel::from_depth(value as usize)
            .ok_or_else(|| format!("heading level must be 1, 2 or 3, got {}", value))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.depth() as u8
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.depth())
    }
}

/// One heading discovered in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading text without the `#` run and surrounding whitespace
    pub title: String,

    /// Link target including the leading `#`, e.g. `#getting-started`
    pub fragment: String,

    /// Heading depth
    pub level: HeadingLevel,

    /// Zero-based line index in the source text, `None` for entries that
    /// do not come from a heading line (the document title)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl HeadingEntry {
    /// Create an entry for a heading on `line`, from a bare identifier
    /// (without `#`).
    pub fn new(title: impl Into<String>, id: &str, level: HeadingLevel, line: usize) -> Self {
        Self {
            line: Some(line),
            ..Self::detached(title, id, level)
        }
    }

    /// Create an entry that has no line in the document.
    pub fn detached(title: impl Into<String>, id: &str, level: HeadingLevel) -> Self {
        Self {
            title: title.into(),
            fragment: format!("#{}", id),
            level,
            line: None,
        }
    }

    /// The element identifier, i.e. the fragment without its `#`.
    pub fn id(&self) -> &str {
        self.fragment.strip_prefix('#').unwrap_or(&self.fragment)
    }
}

impl fmt::Display for HeadingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", "#".repeat(self.level.depth()), self.title, self.fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_depth() {
        assert_eq!(HeadingLevel::from_depth(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_depth(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_depth(0), None);
        assert_eq!(HeadingLevel::from_depth(4), None);
    }

    #[test]
    fn test_entry_id_strips_hash() {
        let entry = HeadingEntry::new("Getting Started", "getting-started", HeadingLevel::H2, 4);
        assert_eq!(entry.fragment, "#getting-started");
        assert_eq!(entry.id(), "getting-started");
    }

    #[test]
    fn test_entry_serializes_level_as_number() {
        let entry = HeadingEntry::new("Title", "title", HeadingLevel::H1, 0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["fragment"], "#title");

        let back: HeadingEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_detached_entry_has_no_line() {
        let entry = HeadingEntry::detached("Post", "title", HeadingLevel::H1);
        assert_eq!(entry.line, None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("line").is_none());

        let back: HeadingEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_level_rejects_out_of_range() {
        let result: std::result::Result<HeadingLevel, _> = serde_json::from_str("4");
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_display() {
        let entry = HeadingEntry::new("Sub", "sub", HeadingLevel::H3, 2);
        assert_eq!(entry.to_string(), "### Sub (#sub)");
    }
}
