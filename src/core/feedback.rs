//! Three-channel guess feedback
//!
//! Every slot of a guess is scored on three channels, each with its own
//! `Feedback`:
//! - character: the Han character itself
//! - letters: each letter of the plain pinyin
//! - tone: the tone digit
//!
//! Matching never consumes target occurrences, so a repeated character or
//! letter in the guess can be marked present more than once.

use super::record::serialize_tone;
use super::{CharacterRecord, Decomposition, Tone, WORD_LEN};
use serde::Serialize;
use std::fmt;

/// Feedback for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// Right value in the right place
    Exact,
    /// Value occurs elsewhere in the target
    Present,
    /// Value does not occur in the target
    Absent,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Emoji square for this feedback: 🟦 exact, 🟨 present, ⬜ absent
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟦',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}

/// Feedback for one slot of a guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotFeedback {
    character: char,
    character_feedback: Feedback,
    letters: String,
    letter_feedback: Vec<Feedback>,
    #[serde(serialize_with = "serialize_tone")]
    tone: Option<Tone>,
    tone_feedback: Feedback,
}

impl SlotFeedback {
    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn character_feedback(&self) -> Feedback {
        self.character_feedback
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Feedback per letter, aligned 1:1 with `letters()`
    #[inline]
    #[must_use]
    pub fn letter_feedback(&self) -> &[Feedback] {
        &self.letter_feedback
    }

    /// Letters zipped with their feedback
    pub fn scored_letters(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        self.letters.chars().zip(self.letter_feedback.iter().copied())
    }

    #[inline]
    #[must_use]
    pub const fn tone(&self) -> Option<Tone> {
        self.tone
    }

    #[inline]
    #[must_use]
    pub const fn tone_feedback(&self) -> Feedback {
        self.tone_feedback
    }

    /// True if every channel of this slot is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.character_feedback.is_exact()
            && self.tone_feedback.is_exact()
            && self.letter_feedback.iter().all(|f| f.is_exact())
    }
}

/// The scored result of one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuessOutcome {
    slots: [SlotFeedback; WORD_LEN],
}

impl GuessOutcome {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// For slot `i`:
    /// 1. Character: exact if equal to `target[i]`, present if equal to any
    ///    target character, else absent
    /// 2. Letters: letter `j` is exact only if `target[i]` has the same letter
    ///    at offset `j`; a matching letter at the same offset in another slot
    ///    does not count. Otherwise present if the letter appears anywhere in
    ///    the target's letters, else absent
    /// 3. Tone: exact if equal to `target[i]`'s tone (two missing tones are
    ///    equal), present if equal to any target tone, else absent
    ///
    /// # Examples
    /// ```
    /// use sizi_wordle::core::{Feedback, GuessOutcome, decompose};
    /// use sizi_wordle::transliterate::TableTransliterator;
    ///
    /// let table = TableTransliterator::from_pairs([
    ///     ('东', "dong1"), ('南', "nan2"), ('西', "xi1"), ('北', "bei3"),
    /// ]);
    /// let target = decompose("东南西北", &table).unwrap();
    /// let guess = decompose("南北东西", &table).unwrap();
    ///
    /// let outcome = GuessOutcome::evaluate(&target, &guess);
    /// assert!(outcome
    ///     .slots()
    ///     .iter()
    ///     .all(|slot| slot.character_feedback() == Feedback::Present));
    /// ```
    #[must_use]
    pub fn evaluate(target: &Decomposition, guess: &Decomposition) -> Self {
        let target_letters: Vec<Vec<char>> =
            target.iter().map(|r| r.letters().chars().collect()).collect();

        let slots = std::array::from_fn(|i| {
            score_slot(i, &guess[i], target, &target_letters)
        });

        Self { slots }
    }

    /// Slots in word order
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[SlotFeedback; WORD_LEN] {
        &self.slots
    }

    /// Number of slots whose character is exact
    #[must_use]
    pub fn count_exact_characters(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.character_feedback.is_exact())
            .count()
    }

    /// True if every channel of every slot is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.slots.iter().all(SlotFeedback::is_perfect)
    }
}

fn score_slot(
    slot: usize,
    guess: &CharacterRecord,
    target: &Decomposition,
    target_letters: &[Vec<char>],
) -> SlotFeedback {
    let character = guess.character();
    let character_feedback = if character == target[slot].character() {
        Feedback::Exact
    } else if target.iter().any(|r| r.character() == character) {
        Feedback::Present
    } else {
        Feedback::Absent
    };

    let letter_feedback = guess
        .letters()
        .chars()
        .enumerate()
        .map(|(j, letter)| {
            if target_letters[slot].get(j) == Some(&letter) {
                Feedback::Exact
            } else if target_letters.iter().any(|letters| letters.contains(&letter)) {
                Feedback::Present
            } else {
                Feedback::Absent
            }
        })
        .collect();

    let tone = guess.tone();
    let tone_feedback = if tone == target[slot].tone() {
        Feedback::Exact
    } else if target.iter().any(|r| r.tone() == tone) {
        Feedback::Present
    } else {
        Feedback::Absent
    };

    SlotFeedback {
        character,
        character_feedback,
        letters: guess.letters().to_string(),
        letter_feedback,
        tone,
        tone_feedback,
    }
}
