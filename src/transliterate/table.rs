//! Table-driven transliteration
//!
//! A table maps characters to numbered pinyin, one entry per line:
//!
//! ```text
//! # character  numbered pinyin
//! 春 chun1
//! 的 de
//! ```

use super::{Romanization, TransliterationError, Transliterator};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for pinyin tables
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read pinyin table: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected '<character> <pinyin>', got '{content}'")]
    Malformed { line: usize, content: String },
}

/// In-memory `character -> numbered pinyin` table
#[derive(Debug, Clone, Default)]
pub struct TableTransliterator {
    entries: FxHashMap<char, Romanization>,
}

impl TableTransliterator {
    /// Build a table from `(character, numbered pinyin)` pairs
    ///
    /// Plain letters are derived by dropping the digits. Later pairs win.
    ///
    /// # Examples
    /// ```
    /// use sizi_wordle::transliterate::{TableTransliterator, Transliterator};
    ///
    /// let table = TableTransliterator::from_pairs([('春', "chun1"), ('的', "de")]);
    /// let chun = table.romanize('春').unwrap().unwrap();
    /// assert_eq!(chun.plain, "chun");
    /// assert_eq!(chun.numbered, "chun1");
    /// assert!(table.romanize('夏').unwrap().is_none());
    /// ```
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (char, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(ch, numbered)| {
                let plain: String = numbered.chars().filter(|c| !c.is_ascii_digit()).collect();
                (ch, Romanization::new(plain, numbered))
            })
            .collect();

        Self { entries }
    }

    /// Parse a table from text
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// Returns `TableError::Malformed` for a line that is not a single
    /// character followed by a pinyin syllable.
    pub fn parse(content: &str) -> Result<Self, TableError> {
        let mut pairs = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let malformed = || TableError::Malformed {
                line: index + 1,
                content: trimmed.to_string(),
            };

            let mut fields = trimmed.split_whitespace();
            let (Some(character), Some(numbered), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(malformed());
            };

            let mut chars = character.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(malformed());
            };

            pairs.push((ch, numbered));
        }

        Ok(Self::from_pairs(pairs))
    }

    /// Load a table from a file
    ///
    /// # Errors
    /// Returns `TableError::Io` if the file cannot be read, or
    /// `TableError::Malformed` for an invalid line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Number of characters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Transliterator for TableTransliterator {
    fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError> {
        Ok(self.entries.get(&ch).cloned())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let table = TableTransliterator::parse("# header\n\n春 chun1\n  夏\txia4  \n").unwrap();
        assert_eq!(table.len(), 2);

        let xia = table.romanize('夏').unwrap().unwrap();
        assert_eq!(xia, Romanization::new("xia", "xia4"));
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        let err = TableTransliterator::parse("春 chun1\n夏\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 2, .. }));

        let err = TableTransliterator::parse("春夏 chunxia").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));

        let err = TableTransliterator::parse("春 chun 1").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));
    }

    #[test]
    fn neutral_tone_entry_has_no_digit() {
        let table = fixtures::sample_table();
        let de = table.romanize('的').unwrap().unwrap();
        assert_eq!(de.plain, "de");
        assert_eq!(de.numbered, "de");
    }

    #[test]
    fn umlaut_and_v_spellings_agree() {
        let table = TableTransliterator::parse("女 nü3\n吕 lv3\n").unwrap();
        assert_eq!(table.romanize('女').unwrap().unwrap(), Romanization::new("nv", "nv3"));
        assert_eq!(table.romanize('吕').unwrap().unwrap().plain, "lv");
    }

    #[test]
    fn unknown_character_is_none() {
        let table = fixtures::sample_table();
        assert_eq!(table.romanize('猫').unwrap(), None);
    }

    #[test]
    fn load_from_file_reads_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "秋 qiu1").unwrap();
        writeln!(file, "冬 dong1").unwrap();

        let table = TableTransliterator::load_from_file(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = TableTransliterator::load_from_file("/nonexistent/table.txt").unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }
}
