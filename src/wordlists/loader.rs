//! Word bank loading utilities
//!
//! Provides the validated `WordBank` used to pick targets, built either from
//! the embedded constants or from a file.

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for word bank construction
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
    #[error("entry {line} ('{entry}'): {source}")]
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },
    #[error("word bank is empty")]
    Empty,
}

/// A non-empty list of four-character target words
///
/// Every entry is validated when the bank is built, so picking a target
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Create a bank from already validated words
    ///
    /// # Errors
    /// Returns `WordBankError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words })
    }

    /// Pick a target uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse word bank text, one word per line
///
/// Blank lines and lines starting with `#` are skipped; any other line must be
/// a four-character word.
///
/// # Errors
/// Returns `WordBankError::InvalidEntry` for the first invalid line, or
/// `WordBankError::Empty` if no words remain.
pub fn parse_bank(content: &str) -> Result<WordBank, WordBankError> {
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| WordBankError::InvalidEntry {
            line: index + 1,
            entry: trimmed.to_string(),
            source,
        })?;
        words.push(word);
    }

    WordBank::new(words)
}

/// Load a word bank from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a validation error for
/// an invalid or empty bank.
///
/// # Examples
/// ```no_run
/// use sizi_wordle::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/classic.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, WordBankError> {
    let content = fs::read_to_string(path)?;
    parse_bank(&content)
}

/// Convert embedded string slices to a word bank
///
/// # Errors
/// Returns a validation error for an invalid entry or if all slices are empty.
///
/// # Examples
/// ```
/// use sizi_wordle::wordlists::loader::bank_from_slices;
/// use sizi_wordle::wordlists::{CASUAL, CLASSIC};
///
/// let bank = bank_from_slices(&[CLASSIC, CASUAL]).unwrap();
/// assert_eq!(bank.len(), CLASSIC.len() + CASUAL.len());
/// ```
pub fn bank_from_slices(slices: &[&[&str]]) -> Result<WordBank, WordBankError> {
    let words = slices
        .iter()
        .flat_map(|slice| slice.iter())
        .enumerate()
        .map(|(index, &entry)| {
            Word::new(entry).map_err(|source| WordBankError::InvalidEntry {
                line: index + 1,
                entry: entry.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordBank::new(words)
}
