//! Output formatters for batch results

mod json;
mod markdown;
mod text;

pub use json::format_json;
pub use markdown::format_markdown;
pub use text::format_text;
