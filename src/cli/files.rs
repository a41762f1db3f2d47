//! Collecting the documents to outline from command-line paths

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Extensions of documents picked up when walking a directory
const DOCUMENT_EXTENSIONS: [&str; 3] = ["md", "mdx", "markdown"];

/// Directories never descended into, on top of hidden ones
const SKIPPED_DIRS: [&str; 2] = ["node_modules", "target"];

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

/// Hidden directories (`.git`, `.next`) and build output hold no posts
fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

/// Turn command-line paths into a sorted, de-duplicated list of documents.
///
/// Files are taken as given whatever their extension; directories contribute
/// every Markdown/MDX document below them.
pub(crate) fn expand_paths(paths: &[String]) -> Vec<String> {
    let mut documents = Vec::new();
    for path in paths {
        if !Path::new(path).is_dir() {
            documents.push(path.clone());
            continue;
        }

        let walker = WalkDir::new(path)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_document(entry.path()) => {
                    documents.push(entry.path().to_string_lossy().into_owned());
                }
                Ok(_) => {}
                Err(err) => log::warn!("skipping unreadable path: {}", err),
            }
        }
    }
    documents.sort();
    documents.dedup();
    documents
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

/// Drop documents matching any `--ignore` glob
pub(crate) fn filter_ignored(
    documents: Vec<String>,
    ignore_patterns: &[String],
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if ignore_patterns.is_empty() {
        return Ok(documents);
    }

    let ignore_set = build_ignore_set(ignore_patterns)?;
    let (ignored, kept): (Vec<_>, Vec<_>) = documents
        .into_iter()
        .partition(|document| ignore_set.is_match(document));
    log::info!("ignoring {} document(s)", ignored.len());
    Ok(kept)
}
