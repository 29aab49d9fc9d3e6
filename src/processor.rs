//! Real-time word-frequency counting over streamed text chunks.
//!
//! A [`WordFrequencyCounter`] owns its counts behind a single mutex. Any number of
//! threads may feed chunks through [`DataProcessor::process`] while others take
//! snapshots with [`DataProcessor::results`]; every chunk is applied as one critical
//! section, so a snapshot never observes half of a chunk.

use crate::error::DecodeError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Something that consumes chunks of text and reports per-word counts.
pub trait DataProcessor: Send + Sync {
    /// Feeds one chunk of text.
    fn process(&self, chunk: &str);

    /// Returns an independent copy of the counts accumulated so far.
    fn results(&self) -> HashMap<String, u64>;

    /// Feeds one chunk of raw bytes, decoding it as UTF-8 first.
    ///
    /// # Errors
    /// Returns a `DecodeError` if `chunk` is not valid UTF-8. No counts change in that case.
    fn process_bytes(&self, chunk: &[u8]) -> Result<(), DecodeError> {
        let text = std::str::from_utf8(chunk)?;
        self.process(text);
        Ok(())
    }
}

/// Splits a chunk into words on runs of Unicode whitespace.
pub fn tokenize(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.split_whitespace()
}

/// A thread-safe word-frequency counter.
///
/// Words are case-sensitive tokens exactly as produced by [`tokenize`]. Counts only
/// ever grow; no word is removed once seen.
#[derive(Debug, Default)]
pub struct WordFrequencyCounter {
    counts: Mutex<HashMap<String, u64>>,
}

impl WordFrequencyCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a plain increment that cannot panic halfway, so a poisoned map
    // is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count of a single word, `0` if it has never been seen.
    #[must_use]
    pub fn count(&self, word: &str) -> u64 {
        self.lock().get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words seen so far.
    #[must_use]
    pub fn unique_words(&self) -> usize {
        self.lock().len()
    }

    /// Total number of words seen so far.
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.lock().values().sum()
    }

    /// The `n` most frequent words, highest count first. Ties are broken by the
    /// word itself so the order is stable between calls.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self.results().into_iter().collect();
        entries.sort_by(|(a_word, a_count), (b_word, b_count)| {
            b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
        });
        entries.truncate(n);
        entries
    }
}

impl DataProcessor for WordFrequencyCounter {
    fn process(&self, chunk: &str) {
        let mut words = tokenize(chunk).peekable();
        if words.peek().is_none() {
            return;
        }

        let mut counts = self.lock();
        let mut seen = 0usize;
        for word in words {
            // Avoid allocating a key for words that are already present.
            if let Some(count) = counts.get_mut(word) {
                *count += 1;
            } else {
                counts.insert(word.to_string(), 1);
            }
            seen += 1;
        }
        drop(counts);

        log::trace!("processed chunk with {seen} words");
    }

    fn results(&self) -> HashMap<String, u64> {
        self.lock().clone()
    }
}
