//! Building tables of contents for many documents

use crate::config::Config;
use crate::reading::reading_time;
use crate::toc::TableOfContents;
use crate::types::{DocumentToc, ExtractOptions, Result, TocError, TocOptions, TocResults};
use rayon::prelude::*;

/// Build tables of contents synchronously
///
/// Files are read sequentially (for proper error reporting) then processed
/// in parallel using rayon.
pub fn toc_sync(options: &TocOptions) -> Result<TocResults> {
    let mut results = TocResults::new();

    let config = load_config(options)?;
    let extract = extract_options(options, &config);

    // Read all files first (sequential for proper error reporting)
    let mut inputs: Vec<(String, String)> = Vec::new();
    for file_path in &options.files {
        let content = std::fs::read_to_string(file_path)
            .map_err(|_| TocError::FileNotFound(file_path.clone()))?;
        inputs.push((file_path.clone(), content));
    }
    for (name, content) in &options.strings {
        inputs.push((name.clone(), content.clone()));
    }

    let documents: Vec<(String, DocumentToc)> = inputs
        .par_iter()
        .map(|(name, content)| {
            let document = process_content(content, options.title.as_deref(), &extract, &config);
            log::debug!("{}: {} outline entries", name, document.toc.len());
            (name.clone(), document)
        })
        .collect();

    for (name, document) in documents {
        results.add(name, document);
    }

    Ok(results)
}

/// Build tables of contents asynchronously
///
/// Files are read concurrently with tokio, then processed on the blocking
/// pool (CPU-bound work).
#[cfg(feature = "async")]
pub async fn toc_async(options: &TocOptions) -> Result<TocResults> {
    use std::sync::Arc;
    use tokio::fs;

    let mut results = TocResults::new();

    let config = Arc::new(load_config(options)?);
    let extract = Arc::new(extract_options(options, &config));
    let title: Option<Arc<str>> = options.title.as_deref().map(Arc::from);

    // Read all files concurrently
    let read_handles: Vec<_> = options
        .files
        .iter()
        .map(|file_path| {
            let path = file_path.clone();
            tokio::spawn(async move {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|_| TocError::FileNotFound(path.clone()));
                (path, content)
            })
        })
        .collect();

    let mut inputs: Vec<(String, String)> = Vec::new();
    for handle in read_handles {
        let (path, content_result) = handle
            .await
            .map_err(|e| TocError::AsyncRuntime(format!("Task join error: {}", e)))?;
        inputs.push((path, content_result?));
    }

    for (name, content) in &options.strings {
        inputs.push((name.clone(), content.clone()));
    }

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|(name, content)| {
            let config = Arc::clone(&config);
            let extract = Arc::clone(&extract);
            let title = title.clone();
            tokio::task::spawn_blocking(move || {
                let document = process_content(&content, title.as_deref(), &extract, &config);
                (name, document)
            })
        })
        .collect();

    for handle in handles {
        let (name, document) = handle
            .await
            .map_err(|e| TocError::AsyncRuntime(format!("Task join error: {}", e)))?;
        results.add(name, document);
    }

    Ok(results)
}

/// Load configuration from options
fn load_config(options: &TocOptions) -> Result<Config> {
    let config = if let Some(config) = &options.config {
        config.clone()
    } else if let Some(config_file) = &options.config_file {
        Config::from_file(config_file)?
    } else {
        return Ok(Config::default());
    };
    let config = config.resolve_extends()?;
    config.validate()?;
    Ok(config)
}

fn extract_options(options: &TocOptions, config: &Config) -> ExtractOptions {
    let mut extract = config.extract_options();
    if let Some(resolver) = &options.custom_resolver {
        extract.custom_resolver = Some(resolver.clone());
    }
    extract
}

/// Outline and reading time for a single document
pub fn process_content(
    content: &str,
    title: Option<&str>,
    extract: &ExtractOptions,
    config: &Config,
) -> DocumentToc {
    DocumentToc {
        toc: TableOfContents::new(content, title, extract),
        reading_time: reading_time(content, config.words_per_minute()),
    }
}
