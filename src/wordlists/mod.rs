//! Word banks for target selection
//!
//! Provides embedded word banks compiled into the binary and the validated
//! `WordBank` type built from them or from a file.

mod embedded;
pub mod loader;

pub use embedded::{CASUAL, CASUAL_COUNT, CLASSIC, CLASSIC_COUNT};
pub use loader::{WordBank, WordBankError};

use std::str::FromStr;

/// Where the active word bank comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// Traditional four-character phrases
    Classic,
    /// Slang and campus phrases
    Casual,
    /// Both embedded banks
    All,
    /// A file with one word per line
    File(String),
}

impl WordListSource {
    /// Build the word bank for this source
    ///
    /// # Errors
    /// Returns `WordBankError` if the file cannot be read or is invalid.
    pub fn load(&self) -> Result<WordBank, WordBankError> {
        match self {
            Self::Classic => loader::bank_from_slices(&[CLASSIC]),
            Self::Casual => loader::bank_from_slices(&[CASUAL]),
            Self::All => loader::bank_from_slices(&[CLASSIC, CASUAL]),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl FromStr for WordListSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "casual" => Ok(Self::Casual),
            "all" => Ok(Self::All),
            "" => Err("word list cannot be empty".to_string()),
            path => Ok(Self::File(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_count_matches_const() {
        assert_eq!(CLASSIC.len(), CLASSIC_COUNT);
    }

    #[test]
    fn casual_count_matches_const() {
        assert_eq!(CASUAL.len(), CASUAL_COUNT);
    }

    #[test]
    fn embedded_words_have_four_characters() {
        for &word in CLASSIC.iter().chain(CASUAL) {
            assert_eq!(
                word.chars().count(),
                4,
                "Word '{word}' is not 4 characters"
            );
        }
    }

    #[test]
    fn embedded_banks_contain_known_words() {
        assert!(CLASSIC.contains(&"春夏秋冬"));
        assert!(CLASSIC.contains(&"东南西北"));
        assert!(CASUAL.contains(&"摸鱼达人"));
    }

    #[test]
    fn sources_load() {
        assert_eq!(WordListSource::Classic.load().unwrap().len(), CLASSIC_COUNT);
        assert_eq!(WordListSource::Casual.load().unwrap().len(), CASUAL_COUNT);
        assert_eq!(
            WordListSource::All.load().unwrap().len(),
            CLASSIC_COUNT + CASUAL_COUNT
        );
    }

    #[test]
    fn source_from_str() {
        assert_eq!("classic".parse::<WordListSource>(), Ok(WordListSource::Classic));
        assert_eq!("all".parse::<WordListSource>(), Ok(WordListSource::All));
        assert_eq!(
            "words.txt".parse::<WordListSource>(),
            Ok(WordListSource::File("words.txt".to_string()))
        );
        assert!("".parse::<WordListSource>().is_err());
    }
}
