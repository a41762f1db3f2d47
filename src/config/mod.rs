//! Configuration parsing and management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::reading::DEFAULT_WORDS_PER_MINUTE;
use crate::slug::SuffixStyle;
use crate::types::{ExtractOptions, Result, TocError};

/// Configuration for mdtoc
///
/// Every field is optional so that a config file, the files it `extends`
/// and command-line flags can be layered on top of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to config file to extend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// How repeated headings are told apart ("numeric" or "level")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix_style: Option<SuffixStyle>,

    /// Base fragment for headings with no sluggable characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_fallback: Option<String>,

    /// Ignore `#` lines inside fenced code blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_code_fences: Option<bool>,

    /// Use trailing `{#id}` markers as heading ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honor_explicit_ids: Option<bool>,

    /// Reading speed for reading time estimates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_per_minute: Option<u32>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every setting spelled out at its default
    pub fn with_defaults() -> Self {
        let options = ExtractOptions::default();
        Self {
            extends: None,
            suffix_style: Some(options.suffix_style),
            empty_fallback: Some(options.empty_fallback),
            skip_code_fences: Some(options.skip_code_fences),
            honor_explicit_ids: Some(options.honor_explicit_ids),
            words_per_minute: Some(DEFAULT_WORDS_PER_MINUTE),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());

        let config = match ext {
            Some("json") => Self::from_json_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))
            }
        }?;
        config.validate()?;
        Ok(config)
    }

    /// Config file names to search for during auto-discovery
    pub const DISCOVERY_NAMES: [&'static str; 5] = [
        ".mdtoc.json",
        ".mdtoc.yaml",
        ".mdtoc.yml",
        ".mdtoc.toml",
        ".mdtocrc",
    ];

    /// Walk up from `start_dir` looking for a config file
    pub fn discover(start_dir: impl AsRef<Path>) -> Option<Self> {
        let mut dir = start_dir.as_ref().to_path_buf();
        loop {
            for name in &Self::DISCOVERY_NAMES {
                let candidate = dir.join(name);
                if !candidate.is_file() {
                    continue;
                }
                match Self::from_file(&candidate) {
                    Ok(config) => {
                        log::debug!("using config {}", candidate.display());
                        return Some(config);
                    }
                    Err(e) => log::warn!("ignoring config {}: {}", candidate.display(), e),
                }
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Resolve the `extends` chain: load the parent config and merge self on top
    pub fn resolve_extends(&self) -> Result<Self> {
        if let Some(ref extends_path) = self.extends {
            let parent = Config::from_file(extends_path)?;
            let mut resolved = parent.resolve_extends()?;
            resolved.merge(self.clone());
            resolved.extends = None;
            Ok(resolved)
        } else {
            Ok(self.clone())
        }
    }

    /// Merge another configuration into this one; settings present in
    /// `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.extends.is_some() {
            self.extends = other.extends;
        }
        if other.suffix_style.is_some() {
            self.suffix_style = other.suffix_style;
        }
        if other.empty_fallback.is_some() {
            self.empty_fallback = other.empty_fallback;
        }
        if other.skip_code_fences.is_some() {
            self.skip_code_fences = other.skip_code_fences;
        }
        if other.honor_explicit_ids.is_some() {
            self.honor_explicit_ids = other.honor_explicit_ids;
        }
        if other.words_per_minute.is_some() {
            self.words_per_minute = other.words_per_minute;
        }
    }

    /// Reject settings that would produce unusable anchors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref fallback) = self.empty_fallback
            && (fallback.is_empty()
                || !fallback
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        {
            return Err(TocError::InvalidConfig(format!(
                "empty_fallback must be lowercase letters, digits and hyphens, got {:?}",
                fallback
            )));
        }
        Ok(())
    }

    /// Extraction options described by this configuration
    pub fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::default();
        if let Some(style) = self.suffix_style {
            options.suffix_style = style;
        }
        if let Some(ref fallback) = self.empty_fallback {
            options.empty_fallback = fallback.clone();
        }
        if let Some(skip) = self.skip_code_fences {
            options.skip_code_fences = skip;
        }
        if let Some(honor) = self.honor_explicit_ids {
            options.honor_explicit_ids = honor;
        }
        options
    }

    /// Effective reading speed
    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute.unwrap_or(DEFAULT_WORDS_PER_MINUTE)
    }
}
