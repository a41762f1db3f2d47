//! Reading time estimation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated time to read a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Whitespace-separated words in the document
    pub words: usize,
    /// Minutes, rounded up, never less than one
    pub minutes: u32,
}

/// Estimate reading time for `content` at `words_per_minute`.
///
/// A speed of 0 falls back to [`DEFAULT_WORDS_PER_MINUTE`].
///
/// # Examples
/// ```
/// let estimate = mdtoc::reading::reading_time("one two three", 200);
/// assert_eq!(estimate.words, 3);
/// assert_eq!(estimate.to_string(), "1 min");
/// ```
pub fn reading_time(content: &str, words_per_minute: u32) -> ReadingTime {
    let wpm = match words_per_minute {
        0 => DEFAULT_WORDS_PER_MINUTE,
        wpm => wpm,
    } as usize;
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(wpm).max(1);

    ReadingTime {
        words,
        minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}
