//! Four-character word representation
//!
//! A Word stores a validated four-character phrase along with its characters
//! for slot-by-slot comparison.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Number of characters (slots) in every word of the game
pub const WORD_LEN: usize = 4;

/// A four-character word
///
/// Length is counted in Unicode scalar values, so each Han character is one slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} characters, got {0}")]
    InvalidLength(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the trimmed text is not exactly
    /// four characters long.
    ///
    /// # Examples
    /// ```
    /// use sizi_wordle::core::Word;
    ///
    /// let word = Word::new("春夏秋冬").unwrap();
    /// assert_eq!(word.text(), "春夏秋冬");
    ///
    /// assert!(Word::new("春夏秋").is_err());
    /// assert!(Word::new("春夏秋冬天").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        let chars: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LEN] = chars
            .try_into()
            .map_err(|chars: Vec<char>| WordError::InvalidLength(chars.len()))?;

        Ok(Self {
            text: text.to_string(),
            chars,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the characters of the word in slot order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LEN] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("春夏秋冬").unwrap();
        assert_eq!(word.text(), "春夏秋冬");
        assert_eq!(word.chars(), &['春', '夏', '秋', '冬']);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  东南西北\n").unwrap();
        assert_eq!(word.text(), "东南西北");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("春夏秋"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new("春夏秋冬天"), Err(WordError::InvalidLength(5)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // 12 bytes of UTF-8, 4 characters
        assert_eq!("梅兰竹菊".len(), 12);
        assert!(Word::new("梅兰竹菊").is_ok());

        // Inner whitespace counts as a character
        assert_eq!(Word::new("春 夏秋冬"), Err(WordError::InvalidLength(5)));
    }

    #[test]
    fn word_slots_keep_order_and_repeats() {
        assert_eq!(Word::new("琴棋书画").unwrap().chars(), &['琴', '棋', '书', '画']);
        assert_eq!(Word::new("理辩理辩").unwrap().chars(), &['理', '辩', '理', '辩']);
    }

    #[test]
    fn word_display_and_serialize() {
        let word = Word::new("风花雪月").unwrap();
        assert_eq!(format!("{word}"), "风花雪月");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"风花雪月\"");
    }

    #[test]
    fn word_equality_is_full_text() {
        assert_eq!(Word::new("春夏秋冬").unwrap(), Word::new(" 春夏秋冬").unwrap());
        assert_ne!(Word::new("春夏秋冬").unwrap(), Word::new("冬秋夏春").unwrap());
    }
}
