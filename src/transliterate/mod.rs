//! Transliteration services
//!
//! The game needs, for every character, its plain pinyin letters and its
//! pinyin with a tone digit. Where that data comes from is behind the
//! `Transliterator` trait.

mod dictionary;
pub(crate) mod table;

pub use dictionary::PinyinTransliterator;
pub use table::{TableError, TableTransliterator};

use thiserror::Error;

/// Romanization of a single character as returned by a transliteration service
///
/// `ü` is always spelled `v`, so `"lü4"` and `"lv4"` give the same letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Romanization {
    /// Plain letters, e.g. `"chun"`
    pub plain: String,
    /// Letters with an embedded tone digit, e.g. `"chun1"`
    pub numbered: String,
}

impl Romanization {
    #[must_use]
    pub fn new(plain: impl Into<String>, numbered: impl Into<String>) -> Self {
        Self {
            plain: spell_umlaut_as_v(plain.into()),
            numbered: spell_umlaut_as_v(numbered.into()),
        }
    }
}

fn spell_umlaut_as_v(pinyin: String) -> String {
    if pinyin.contains('ü') {
        pinyin.replace('ü', "v")
    } else {
        pinyin
    }
}

/// The transliteration service failed (as opposed to not knowing a character)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot transliterate '{character}': {reason}")]
pub struct TransliterationError {
    pub character: char,
    pub reason: String,
}

/// A source of pinyin for single characters
pub trait Transliterator {
    /// Romanize one character
    ///
    /// Returns `Ok(None)` when the character is unknown to the service. That is
    /// not an error: such characters decompose to an empty record.
    ///
    /// # Errors
    /// Returns `TransliterationError` if the service itself failed.
    fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError>;
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError> {
        (**self).romanize(ch)
    }
}

/// Enum wrapper for the shipped transliterators
///
/// Allows choosing the data source at runtime while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum TransliteratorKind {
    /// Built-in pinyin dictionary
    Pinyin(PinyinTransliterator),
    /// User-supplied table
    Table(TableTransliterator),
}

impl Transliterator for TransliteratorKind {
    fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError> {
        match self {
            Self::Pinyin(t) => t.romanize(ch),
            Self::Table(t) => t.romanize(ch),
        }
    }
}
