//! Batch results

use crate::reading::ReadingTime;
use crate::toc::TableOfContents;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outline and reading time of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentToc {
    /// The document's table of contents
    pub toc: TableOfContents,
    /// Estimated reading time
    pub reading_time: ReadingTime,
}

/// Results from processing many documents, keyed by file or string name
#[derive(Debug, Clone, Default, Serialize)]
pub struct TocResults {
    /// Map of file/string name to its outline
    pub results: BTreeMap<String, DocumentToc>,
}

impl TocResults {
    /// Create a new empty TocResults
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the result for a file or string
    pub fn add(&mut self, name: String, document: DocumentToc) {
        self.results.insert(name, document);
    }

    /// Get the result for a specific file or string
    pub fn get(&self, name: &str) -> Option<&DocumentToc> {
        self.results.get(name)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no documents were processed
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Total number of outline entries across all documents
    pub fn heading_count(&self) -> usize {
        self.results.values().map(|doc| doc.toc.len()).sum()
    }
}

impl IntoIterator for TocResults {
    type Item = (String, DocumentToc);
    type IntoIter = std::collections::btree_map::IntoIter<String, DocumentToc>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a TocResults {
    type Item = (&'a String, &'a DocumentToc);
    type IntoIter = std::collections::btree_map::Iter<'a, String, DocumentToc>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
