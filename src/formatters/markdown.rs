//! Markdown output formatter

use crate::types::TocResults;

/// Format results as Markdown link lists.
///
/// A single document renders as its bare list; several documents each get a
/// `## file` heading.
pub fn format_markdown(results: &TocResults) -> String {
    if results.len() == 1 {
        return results
            .results
            .values()
            .map(|document| document.toc.to_markdown())
            .collect();
    }

    let sections: Vec<String> = results
        .into_iter()
        .map(|(file, document)| format!("## {}\n\n{}", file, document.toc.to_markdown()))
        .collect();
    sections.join("\n")
}
