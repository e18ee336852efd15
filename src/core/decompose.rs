//! Word decomposition
//!
//! Turns a four-character word into four `CharacterRecord`s by asking a
//! transliteration service about each character independently.

use super::{CharacterRecord, Tone, WORD_LEN, Word, WordError};
use crate::transliterate::{TransliterationError, Transliterator};
use thiserror::Error;

/// A decomposed word, one record per slot
pub type Decomposition = [CharacterRecord; WORD_LEN];

/// Error type for decomposing raw text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error(transparent)]
    InvalidLength(#[from] WordError),
    #[error(transparent)]
    Transliteration(#[from] TransliterationError),
}

/// Decompose a single character
///
/// A character the service does not know yields `CharacterRecord::unknown`.
///
/// # Errors
/// Returns `TransliterationError` if the service failed.
pub fn decompose_char<T: Transliterator + ?Sized>(
    ch: char,
    transliterator: &T,
) -> Result<CharacterRecord, TransliterationError> {
    let record = match transliterator.romanize(ch)? {
        Some(romanization) => CharacterRecord::new(
            ch,
            romanization.plain,
            Tone::extract(&romanization.numbered),
        ),
        None => CharacterRecord::unknown(ch),
    };

    Ok(record)
}

/// Decompose a validated word
///
/// # Errors
/// Returns `TransliterationError` if the service failed for any character.
pub fn decompose_word<T: Transliterator + ?Sized>(
    word: &Word,
    transliterator: &T,
) -> Result<Decomposition, TransliterationError> {
    let [a, b, c, d] = *word.chars();

    Ok([
        decompose_char(a, transliterator)?,
        decompose_char(b, transliterator)?,
        decompose_char(c, transliterator)?,
        decompose_char(d, transliterator)?,
    ])
}

/// Decompose raw text
///
/// # Errors
/// Returns `DecomposeError::InvalidLength` if `text` is not four characters,
/// or `DecomposeError::Transliteration` if the service failed.
///
/// # Examples
/// ```
/// use sizi_wordle::core::{Tone, decompose};
/// use sizi_wordle::transliterate::TableTransliterator;
///
/// let table = TableTransliterator::from_pairs([
///     ('东', "dong1"), ('南', "nan2"), ('西', "xi1"), ('北', "bei3"),
/// ]);
/// let records = decompose("东南西北", &table).unwrap();
/// assert_eq!(records[1].letters(), "nan");
/// assert_eq!(records[3].tone(), Tone::new(3));
///
/// assert!(decompose("东南西", &table).is_err());
/// ```
pub fn decompose<T: Transliterator + ?Sized>(
    text: &str,
    transliterator: &T,
) -> Result<Decomposition, DecomposeError> {
    let word = Word::new(text)?;
    Ok(decompose_word(&word, transliterator)?)
}
