//! Fragment identifiers for headings
//!
//! A heading's identifier is derived in two steps. [`base_fragment`] turns
//! the title into a URL-safe base, then a [`Slugger`] makes it unique within
//! one document by asking a [`CollisionResolver`] for a suffix whenever the
//! base was already handed out.

use crate::types::{ExtractOptions, HeadingLevel};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Base used when a title has no sluggable characters at all.
pub const DEFAULT_EMPTY_FALLBACK: &str = "section";

/// Derive the base fragment for a heading title.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// `-`, then turns each whitespace run into a single `-`. Existing hyphens are
/// kept as-is, so `"A - B"` becomes `"a---b"`.
///
/// # Examples
/// ```
/// assert_eq!(mdtoc::slug::base_fragment("Hello, World!"), "hello-world");
/// assert_eq!(mdtoc::slug::base_fragment("Rust 2024  Edition"), "rust-2024-edition");
/// assert_eq!(mdtoc::slug::base_fragment("???"), "");
/// ```
pub fn base_fragment(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
            in_whitespace = false;
        }
        // Removed characters neither start nor end a whitespace run
    }
    out
}

/// Policy for naming the Nth repeat of a base fragment.
///
/// The returned suffix is joined to the base with a `-`. `occurrence` starts
/// at 1 for the first collision and keeps counting per base for the rest of
/// the document (per base and level if [`counts_per_level`] says so).
///
/// Suffixes should differ for different occurrences. When a resolver hands
/// back a candidate it already produced for the same heading, the slugger
/// stops trusting it and appends the occurrence number instead.
///
/// [`counts_per_level`]: CollisionResolver::counts_per_level
pub trait CollisionResolver: Send + Sync {
    /// Suffix for the `occurrence`-th collision of `base` at `level`
    fn suffix(&self, base: &str, level: HeadingLevel, occurrence: usize) -> String;

    /// Whether repeats of a base are counted separately for each level
    fn counts_per_level(&self) -> bool {
        false
    }
}

impl fmt::Debug for dyn CollisionResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<collision resolver>")
    }
}

/// Built-in collision policies.
///
/// The two styles produce different anchors for the same document, so a
/// site must stick to one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixStyle {
    /// `intro`, `intro-1`, `intro-2`
    #[default]
    Numeric,
    /// `intro`, `intro-section-1`, `intro-subsection-1`, `intro-item-1`
    ///
    /// Repeats are counted per level.
    Level,
}

impl SuffixStyle {
    /// Parse a style name as used in config files and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "numeric" => Some(SuffixStyle::Numeric),
            "level" => Some(SuffixStyle::Level),
            _ => None,
        }
    }
}

impl fmt::Display for SuffixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixStyle::Numeric => write!(f, "numeric"),
            SuffixStyle::Level => write!(f, "level"),
        }
    }
}

impl CollisionResolver for SuffixStyle {
    fn suffix(&self, _base: &str, level: HeadingLevel, occurrence: usize) -> String {
        match self {
            SuffixStyle::Numeric => occurrence.to_string(),
            SuffixStyle::Level => {
                let name = match level {
                    HeadingLevel::H1 => "section",
                    HeadingLevel::H2 => "subsection",
                    HeadingLevel::H3 => "item",
                };
                format!("{}-{}", name, occurrence)
            }
        }
    }

    fn counts_per_level(&self) -> bool {
        matches!(self, SuffixStyle::Level)
    }
}

/// Hands out unique fragment identifiers for a single document.
///
/// All state lives in the value, so each extraction owns its own slugger and
/// concurrent extractions never interfere.
pub struct Slugger {
    resolver: Arc<dyn CollisionResolver>,
    empty_fallback: String,
    used: HashSet<String>,
    next_occurrence: HashMap<(String, Option<HeadingLevel>), usize>,
}

impl Slugger {
    /// Slugger following the policy in `options`
    pub fn new(options: &ExtractOptions) -> Self {
        let mut slugger = Self::with_resolver(options.resolver());
        slugger.empty_fallback = options.empty_fallback.clone();
        slugger
    }

    /// Slugger with a custom collision policy and the default fallback base
    pub fn with_resolver(resolver: Arc<dyn CollisionResolver>) -> Self {
        Self {
            resolver,
            empty_fallback: DEFAULT_EMPTY_FALLBACK.to_string(),
            used: HashSet::new(),
            next_occurrence: HashMap::new(),
        }
    }

    /// Unique identifier for a heading title.
    pub fn slug(&mut self, title: &str, level: HeadingLevel) -> String {
        let mut base = base_fragment(title);
        if base.is_empty() {
            log::warn!(
                "heading {:?} has no sluggable characters, using {:?}",
                title,
                self.empty_fallback
            );
            base = self.empty_fallback.clone();
        }
        self.assign(base, level)
    }

    /// Make `base` unique and mark the result as taken.
    pub fn assign(&mut self, base: String, level: HeadingLevel) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }

        let key = (base, self.resolver.counts_per_level().then_some(level));
        let base = key.0.as_str();
        let mut occurrence = self.next_occurrence.get(&key).copied().unwrap_or(1);
        let mut tried = HashSet::new();
        // First candidate the resolver repeated; numbered from then on
        let mut repeated: Option<String> = None;
        loop {
            let candidate = match &repeated {
                Some(stem) => format!("{}-{}", stem, occurrence),
                None => {
                    let candidate =
                        format!("{}-{}", base, self.resolver.suffix(base, level, occurrence));
                    if tried.insert(candidate.clone()) {
                        candidate
                    } else {
                        log::warn!(
                            "collision resolver repeated {:?}, numbering repeats of {:?}",
                            candidate,
                            base
                        );
                        let numbered = format!("{}-{}", candidate, occurrence);
                        repeated = Some(candidate);
                        numbered
                    }
                }
            };
            occurrence += 1;
            if self.used.insert(candidate.clone()) {
                log::trace!("fragment {:?} taken, assigned {:?}", base, candidate);
                self.next_occurrence.insert(key, occurrence);
                return candidate;
            }
        }
    }

    /// Mark `id` as taken without assigning it to a heading.
    ///
    /// Returns `false` if it was already taken.
    pub fn reserve(&mut self, id: &str) -> bool {
        self.used.insert(id.to_string())
    }

    /// Whether `id` has been handed out or reserved
    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::with_resolver(Arc::new(SuffixStyle::default()))
    }
}

impl fmt::Debug for Slugger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slugger")
            .field("empty_fallback", &self.empty_fallback)
            .field("used", &self.used.len())
            .finish_non_exhaustive()
    }
}
