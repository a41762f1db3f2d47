//! Table of contents built from a document's headings

use crate::extract::extract_with_slugger;
use crate::slug::Slugger;
use crate::types::{ExtractOptions, HeadingEntry, HeadingLevel};
use serde::{Deserialize, Serialize};

/// Id of the entry created for the document title.
pub const TITLE_ID: &str = "title";

/// Ordered outline of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    entries: Vec<HeadingEntry>,
}

impl TableOfContents {
    /// Build the outline of `content`.
    ///
    /// When `title` is given it becomes the first entry, at level 1 with the
    /// fragment `#title`. That id is reserved before the body is scanned, so
    /// a heading that would also slug to `title` gets a suffix instead.
    pub fn new(content: &str, title: Option<&str>, options: &ExtractOptions) -> Self {
        let mut slugger = Slugger::new(options);
        let mut entries = Vec::new();

        if let Some(title) = title {
            slugger.reserve(TITLE_ID);
            entries.push(HeadingEntry::detached(title, TITLE_ID, HeadingLevel::H1));
        }
        entries.extend(extract_with_slugger(content, options, &mut slugger));

        Self { entries }
    }

    /// Outline of `content` with default options and no title entry
    pub fn from_content(content: &str) -> Self {
        Self::new(content, None, &ExtractOptions::default())
    }

    /// Entries in document order
    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the outline has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry whose id (fragment without `#`) is `id`
    pub fn find(&self, id: &str) -> Option<&HeadingEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Render as a nested Markdown list of links.
    ///
    /// Level-1 entries sit at the left margin, deeper ones are indented two
    /// spaces per level.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let indent = "  ".repeat(entry.level.depth() - 1);
            out.push_str(&format!(
                "{}- [{}]({})\n",
                indent,
                escape_link_text(&entry.title),
                entry.fragment
            ));
        }
        out
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a HeadingEntry;
    type IntoIter = std::slice::Iter<'a, HeadingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Tracks which outline entry is currently on screen.
///
/// Feed it intersection events for heading elements as the reader scrolls;
/// the most recent heading that entered view becomes active. Events for ids
/// that are not in the outline are ignored.
#[derive(Debug, Clone)]
pub struct ActiveHeading<'a> {
    toc: &'a TableOfContents,
    active: Option<usize>,
}

impl<'a> ActiveHeading<'a> {
    /// Tracker with no active entry
    pub fn new(toc: &'a TableOfContents) -> Self {
        Self { toc, active: None }
    }

    /// Record that the element `id` entered or left the viewport.
    ///
    /// Returns `true` if the active entry changed.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(index) = self.toc.entries.iter().position(|e| e.id() == id) else {
            return false;
        };
        let changed = self.active != Some(index);
        self.active = Some(index);
        changed
    }

    /// Process a batch of `(id, intersecting)` events in order.
    pub fn observe_batch<'i>(&mut self, events: impl IntoIterator<Item = (&'i str, bool)>) -> bool {
        let before = self.active;
        for (id, intersecting) in events {
            self.observe(id, intersecting);
        }
        before != self.active
    }

    /// The active entry, if any heading has been seen
    pub fn active(&self) -> Option<&'a HeadingEntry> {
        let toc = self.toc;
        self.active.map(move |index| &toc.entries[index])
    }

    /// Whether `entry` is the active one
    pub fn is_active(&self, entry: &HeadingEntry) -> bool {
        self.active()
            .is_some_and(|active| active.fragment == entry.fragment)
    }
}
