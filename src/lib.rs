//! # mdtoc
//!
//! Heading extraction and table-of-contents generation for Markdown and MDX
//! documents.
//!
//! ## Features
//!
//! - **Heading extraction** for `#`, `##` and `###` lines, in document order
//! - **Unique anchor slugs** with a pluggable policy for repeated titles
//! - **Anchor insertion**: write `{#id}` markers back into the document
//! - **Tables of contents** with an optional title entry and scroll tracking
//! - **Reading time** estimates
//! - **Configuration** via JSON, YAML, or TOML files
//! - **Batch processing** of many files in parallel, sync or async
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc::{add_heading_ids, extract_headings};
//!
//! let post = "# Intro\n\nHello.\n\n## Setup\n\n## Setup\n";
//!
//! let headings = extract_headings(post);
//! assert_eq!(headings[2].fragment, "#setup-1");
//!
//! let annotated = add_heading_ids(post);
//! assert!(annotated.ends_with("## Setup {#setup-1}\n"));
//! ```
//!
//! ### Many documents
//!
//! ```rust,no_run
//! use mdtoc::{toc_sync, TocOptions};
//!
//! let options = TocOptions::new()
//!     .with_files(["content/posts/hello.mdx", "content/posts/world.mdx"])
//!     .with_title("My Blog");
//!
//! let results = toc_sync(&options)?;
//! for (file, document) in &results {
//!     println!("{}: {} headings, {}", file, document.toc.len(), document.reading_time);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Repeated headings
//!
//! The first heading with a given slug keeps it; later ones get a suffix.
//! The default [`SuffixStyle::Numeric`] produces `intro`, `intro-1`,
//! `intro-2`. [`SuffixStyle::Level`] names the suffix after the heading
//! level instead (`intro-section-1`, `intro-subsection-1`). Anything else can
//! be plugged in through [`CollisionResolver`].
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "suffix_style": "numeric",
//!   "empty_fallback": "section",
//!   "skip_code_fences": false,
//!   "honor_explicit_ids": false,
//!   "words_per_minute": 200
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod extract;
pub mod formatters;
pub mod parser;
pub mod process;
pub mod reading;
pub mod slug;
pub mod toc;
pub mod types;

// Re-export main types and functions
pub use config::Config;
pub use extract::{
    add_heading_ids, add_heading_ids_with, extract_headings, extract_headings_with,
    parse_heading_ids, parse_heading_ids_with,
};
pub use process::toc_sync;
pub use slug::{CollisionResolver, Slugger, SuffixStyle};
pub use toc::{ActiveHeading, TableOfContents};
pub use types::{
    DocumentToc, ExtractOptions, HeadingEntry, HeadingLevel, Result, TocError, TocOptions,
    TocResults,
};

#[cfg(feature = "async")]
pub use process::toc_async;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
