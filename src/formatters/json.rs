//! JSON output formatter

use crate::types::TocResults;

/// Format results as JSON
pub fn format_json(results: &TocResults) -> String {
    serde_json::to_string_pretty(results).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize results: {}\"}}", e)
    })
}
