//! Plain text output formatter

use crate::types::TocResults;

/// Format results as plain text, one heading per line:
/// `file:line: ## Title (#fragment)`. The title entry has no line and is
/// printed as `file: # Title (#title)`.
///
/// With `reading_time`, each document is preceded by a
/// `file: N words, M min` line.
pub fn format_text(results: &TocResults, reading_time: bool) -> String {
    let mut output = Vec::new();

    for (file, document) in results {
        if reading_time {
            output.push(format!(
                "{}: {} words, {}",
                file, document.reading_time.words, document.reading_time
            ));
        }
        for entry in &document.toc {
            match entry.line {
                Some(line) => output.push(format!("{}:{}: {}", file, line + 1, entry)),
                None => output.push(format!("{}: {}", file, entry)),
            }
        }
    }

    output.join("\n")
}
