//! Options for heading extraction and batch processing

use crate::config::Config;
use crate::slug::{CollisionResolver, DEFAULT_EMPTY_FALLBACK, SuffixStyle};
use std::collections::HashMap;
use std::sync::Arc;

/// How headings are recognised and how their fragments are assigned
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Built-in collision policy, used unless `custom_resolver` is set
    pub suffix_style: SuffixStyle,

    /// Custom collision policy
    pub custom_resolver: Option<Arc<dyn CollisionResolver>>,

    /// Base fragment for titles with no sluggable characters
    pub empty_fallback: String,

    /// Ignore `#` lines inside fenced code blocks
    pub skip_code_fences: bool,

    /// Treat a trailing `{#id}` marker as the heading's anchor instead of
    /// title text. Off by default; the marker's id is still normalised and
    /// made unique.
    pub honor_explicit_ids: bool,
}

impl ExtractOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The collision policy in effect
    pub fn resolver(&self) -> Arc<dyn CollisionResolver> {
        match &self.custom_resolver {
            Some(resolver) => Arc::clone(resolver),
            None => Arc::new(self.suffix_style),
        }
    }

    /// Set the built-in collision policy
    pub fn with_suffix_style(mut self, style: SuffixStyle) -> Self {
        self.suffix_style = style;
        self
    }

    /// Use a custom collision policy
    pub fn with_resolver(mut self, resolver: Arc<dyn CollisionResolver>) -> Self {
        self.custom_resolver = Some(resolver);
        self
    }

    /// Skip headings inside fenced code blocks
    pub fn skip_code_fences(mut self) -> Self {
        self.skip_code_fences = true;
        self
    }

    /// Use existing `{#id}` markers as anchors
    pub fn honor_explicit_ids(mut self) -> Self {
        self.honor_explicit_ids = true;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            suffix_style: SuffixStyle::default(),
            custom_resolver: None,
            empty_fallback: DEFAULT_EMPTY_FALLBACK.to_string(),
            skip_code_fences: false,
            honor_explicit_ids: false,
        }
    }
}

/// Options for building tables of contents over many documents
#[derive(Debug, Default)]
pub struct TocOptions {
    /// Files to process (paths)
    pub files: Vec<String>,

    /// Strings to process (keyed by identifier)
    pub strings: HashMap<String, String>,

    /// Configuration object
    pub config: Option<Config>,

    /// Path to configuration file
    pub config_file: Option<String>,

    /// Document title prepended to every table as a level-1 entry
    pub title: Option<String>,

    /// Custom collision policy, overrides the configured suffix style
    pub custom_resolver: Option<Arc<dyn CollisionResolver>>,
}

impl TocOptions {
    /// Create a new TocOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to process
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Add multiple files to process
    pub fn with_files(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Add a string to process
    pub fn with_string(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.strings.insert(name.into(), content.into());
        self
    }

    /// Set the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the configuration file path
    pub fn with_config_file(mut self, path: impl Into<String>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use a custom collision policy
    pub fn with_resolver(mut self, resolver: Arc<dyn CollisionResolver>) -> Self {
        self.custom_resolver = Some(resolver);
        self
    }
}
