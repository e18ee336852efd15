//! Word comparison command
//!
//! Scores one guess against a chosen target without starting a session.

use crate::core::{DecomposeError, Decomposition, GuessOutcome, Word, decompose_word};
use crate::transliterate::Transliterator;

/// Result of comparing a guess with a target
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub target_word: Word,
    pub guess_word: Word,
    pub target: Decomposition,
    pub guess: Decomposition,
    pub outcome: GuessOutcome,
}

/// Decompose both words and score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not four characters long or the
/// transliteration service fails.
pub fn compare_words<T: Transliterator + ?Sized>(
    target: &str,
    guess: &str,
    transliterator: &T,
) -> Result<CompareResult, DecomposeError> {
    let target_word = Word::new(target)?;
    let guess_word = Word::new(guess)?;

    let target = decompose_word(&target_word, transliterator)?;
    let guess = decompose_word(&guess_word, transliterator)?;
    let outcome = GuessOutcome::evaluate(&target, &guess);

    Ok(CompareResult {
        target_word,
        guess_word,
        target,
        guess,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, WordError};
    use crate::transliterate::table::fixtures::sample_table;

    #[test]
    fn compare_identical() {
        let result = compare_words("春夏秋冬", "春夏秋冬", &sample_table()).unwrap();
        assert!(result.outcome.is_perfect());
        assert_eq!(result.target, result.guess);
    }

    #[test]
    fn compare_shuffled() {
        let result = compare_words("东南西北", "北西南东", &sample_table()).unwrap();
        assert_eq!(result.outcome.count_exact_characters(), 0);
        assert!(
            result
                .outcome
                .slots()
                .iter()
                .all(|slot| slot.character_feedback() == Feedback::Present)
        );
    }

    #[test]
    fn compare_rejects_bad_length() {
        let err = compare_words("春夏秋冬", "春", &sample_table()).unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::InvalidLength(WordError::InvalidLength(1))
        ));
    }
}
