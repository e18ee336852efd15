//! Game session state machine
//!
//! A `Session` owns the secret target, the attempt counter and the guess
//! history. It starts `InProgress` and ends in `Won` or `Exhausted`; a new game
//! is a new `Session`.

use crate::core::{Decomposition, GuessOutcome, Word, WordError, decompose_word};
use crate::transliterate::{TransliterationError, Transliterator};
use crate::wordlists::WordBank;
use rand::Rng;
use serde::Serialize;
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    Won,
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Rejected or failed guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The session already ended; nothing was counted
    #[error("the game is already over")]
    SessionFinished,
    /// The guess is not four characters; nothing was counted
    #[error(transparent)]
    InvalidLength(#[from] WordError),
    /// Transliteration failed; the attempt was still counted
    #[error("failed to process '{word}': {source}")]
    Processing {
        word: String,
        attempts: u32,
        source: TransliterationError,
        /// Present when the counted attempt was the last one
        reveal: Option<Reveal>,
    },
}

/// One evaluated guess in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    attempt: u32,
    word: Word,
    result: GuessOutcome,
}

impl GuessRecord {
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn outcome(&self) -> &GuessOutcome {
        &self.result
    }
}

/// The target word and its breakdown, shown once a session is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reveal {
    pub target_word: Word,
    pub target_details: Decomposition,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub attempts: u32,
    pub max_attempts: u32,
    pub state: SessionState,
    /// Present only when the session ended by running out of attempts
    pub reveal: Option<Reveal>,
}

impl GuessReport {
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_attempts - self.attempts
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.is_won()
    }
}

/// Snapshot of a session for status queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub attempts: u32,
    pub max_attempts: u32,
    pub finished: bool,
    pub won: bool,
    pub history: Vec<GuessRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<Reveal>,
}

/// A single game
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    target_records: Decomposition,
    attempts: u32,
    max_attempts: NonZeroU32,
    state: SessionState,
    history: Vec<GuessRecord>,
}

impl Session {
    /// Start a session with a target picked uniformly from `bank`
    ///
    /// # Errors
    /// Returns `TransliterationError` if the target cannot be decomposed.
    pub fn start<T, R>(
        bank: &WordBank,
        max_attempts: NonZeroU32,
        transliterator: &T,
        rng: &mut R,
    ) -> Result<Self, TransliterationError>
    where
        T: Transliterator + ?Sized,
        R: Rng + ?Sized,
    {
        let target = bank.choose(rng).clone();
        Self::with_target(target, max_attempts, transliterator)
    }

    /// Start a session with a known target
    ///
    /// # Errors
    /// Returns `TransliterationError` if the target cannot be decomposed.
    pub fn with_target<T: Transliterator + ?Sized>(
        target: Word,
        max_attempts: NonZeroU32,
        transliterator: &T,
    ) -> Result<Self, TransliterationError> {
        let target_records = decompose_word(&target, transliterator)?;
        debug!(max_attempts = max_attempts.get(), "session started");

        Ok(Self {
            target,
            target_records,
            attempts: 0,
            max_attempts,
            state: SessionState::InProgress,
            history: Vec::new(),
        })
    }

    /// Submit a guess
    ///
    /// Rejections (`SessionFinished`, `InvalidLength`) leave the session
    /// untouched. Any other guess counts as an attempt, even if transliteration
    /// fails afterwards.
    ///
    /// # Errors
    /// Returns `GuessError` for rejected guesses and transliteration failures.
    pub fn submit_guess<T: Transliterator + ?Sized>(
        &mut self,
        guess: &str,
        transliterator: &T,
    ) -> Result<GuessReport, GuessError> {
        if self.state.is_finished() {
            debug!(guess, "guess rejected: session finished");
            return Err(GuessError::SessionFinished);
        }

        let word = Word::new(guess).inspect_err(|err| debug!(guess, %err, "guess rejected"))?;

        self.attempts += 1;

        let records = match decompose_word(&word, transliterator) {
            Ok(records) => records,
            Err(source) => {
                warn!(guess = word.text(), %source, attempts = self.attempts, "guess not processed");
                let mut reveal = None;
                if self.attempts == self.max_attempts.get() {
                    self.state = SessionState::Exhausted;
                    reveal = Some(self.reveal_target());
                    info!(attempts = self.attempts, "attempts exhausted");
                }
                return Err(GuessError::Processing {
                    word: word.text().to_string(),
                    attempts: self.attempts,
                    source,
                    reveal,
                });
            }
        };

        let outcome = GuessOutcome::evaluate(&self.target_records, &records);
        self.history.push(GuessRecord {
            attempt: self.attempts,
            word: word.clone(),
            result: outcome.clone(),
        });

        let mut reveal = None;
        if word == self.target {
            self.state = SessionState::Won;
            info!(attempts = self.attempts, "target found");
        } else if self.attempts == self.max_attempts.get() {
            self.state = SessionState::Exhausted;
            reveal = Some(self.reveal_target());
            info!(attempts = self.attempts, "attempts exhausted");
        } else {
            debug!(
                attempts = self.attempts,
                exact = outcome.count_exact_characters(),
                "guess evaluated"
            );
        }

        Ok(GuessReport {
            outcome,
            attempts: self.attempts,
            max_attempts: self.max_attempts.get(),
            state: self.state,
            reveal,
        })
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts.get()
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.max_attempts.get() - self.attempts
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.state.is_won()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The target and its breakdown, once the session is over
    #[must_use]
    pub fn reveal(&self) -> Option<Reveal> {
        self.is_finished().then(|| self.reveal_target())
    }

    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            attempts: self.attempts,
            max_attempts: self.max_attempts.get(),
            finished: self.is_finished(),
            won: self.is_won(),
            history: self.history.clone(),
            reveal: self.reveal(),
        }
    }

    fn reveal_target(&self) -> Reveal {
        Reveal {
            target_word: self.target.clone(),
            target_details: self.target_records.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Tone};
    use crate::transliterate::table::fixtures::sample_table;
    use crate::transliterate::{Romanization, TableTransliterator};
    use crate::wordlists::loader::bank_from_slices;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn limit(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn session(target: &str, max_attempts: u32) -> Session {
        Session::with_target(Word::new(target).unwrap(), limit(max_attempts), &sample_table())
            .unwrap()
    }

    /// Table that fails for one character
    struct Broken {
        table: TableTransliterator,
        broken: char,
    }

    impl Transliterator for Broken {
        fn romanize(&self, ch: char) -> Result<Option<Romanization>, TransliterationError> {
            if ch == self.broken {
                return Err(TransliterationError {
                    character: ch,
                    reason: "offline".to_string(),
                });
            }
            self.table.romanize(ch)
        }
    }

    fn broken_on(broken: char) -> Broken {
        Broken {
            table: sample_table(),
            broken,
        }
    }

    #[test]
    fn new_session_is_in_progress() {
        let s = session("春夏秋冬", 6);
        assert_eq!(s.state(), SessionState::InProgress);
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.max_attempts(), 6);
        assert_eq!(s.remaining(), 6);
        assert!(s.history().is_empty());
        assert_eq!(s.reveal(), None);
    }

    #[test]
    fn correct_first_guess_wins() {
        let mut s = session("春夏秋冬", 6);
        let report = s.submit_guess("春夏秋冬", &sample_table()).unwrap();

        assert!(report.is_won());
        assert!(report.is_finished());
        assert!(report.outcome.is_perfect());
        assert_eq!(report.attempts, 1);
        assert_eq!(report.reveal, None);
        assert!(s.is_won());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn wrong_guess_counts_attempt() {
        let mut s = session("春夏秋冬", 6);
        let report = s.submit_guess("东南西北", &sample_table()).unwrap();

        assert_eq!(report.state, SessionState::InProgress);
        assert_eq!(report.attempts, 1);
        assert_eq!(report.remaining(), 5);
        assert_eq!(s.history()[0].attempt(), 1);
        assert_eq!(s.history()[0].word().text(), "东南西北");
    }

    #[test]
    fn exhaustion_reveals_target() {
        let mut s = session("春夏秋冬", 2);
        let table = sample_table();

        let first = s.submit_guess("东南西北", &table).unwrap();
        assert!(!first.is_finished());

        let second = s.submit_guess("喜怒哀乐", &table).unwrap();
        assert!(second.is_finished());
        assert!(!second.is_won());
        assert_eq!(second.state, SessionState::Exhausted);
        assert_eq!(second.attempts, 2);

        let reveal = second.reveal.unwrap();
        assert_eq!(reveal.target_word.text(), "春夏秋冬");
        assert_eq!(reveal.target_details[1].letters(), "xia");
        assert_eq!(reveal.target_details[1].tone(), Tone::new(4));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut s = session("春夏秋冬", 2);
        let table = sample_table();

        s.submit_guess("东南西北", &table).unwrap();
        let report = s.submit_guess("春夏秋冬", &table).unwrap();

        assert_eq!(report.state, SessionState::Won);
        assert_eq!(report.reveal, None);
    }

    #[test]
    fn wrong_length_is_rejected_without_counting() {
        let mut s = session("春夏秋冬", 6);
        let err = s.submit_guess("春夏秋", &sample_table()).unwrap_err();

        assert_eq!(err, GuessError::InvalidLength(WordError::InvalidLength(3)));
        assert_eq!(s.attempts(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let mut s = session("春夏秋冬", 6);
        let table = sample_table();
        s.submit_guess("春夏秋冬", &table).unwrap();

        assert_eq!(
            s.submit_guess("东南西北", &table),
            Err(GuessError::SessionFinished)
        );
        assert_eq!(s.attempts(), 1);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn finished_check_precedes_length_check() {
        let mut s = session("春夏秋冬", 1);
        s.submit_guess("东南西北", &sample_table()).unwrap();
        assert_eq!(
            s.submit_guess("春", &sample_table()),
            Err(GuessError::SessionFinished)
        );
    }

    #[test]
    fn processing_error_counts_attempt_and_keeps_playing() {
        let mut s = session("春夏秋冬", 6);
        let err = s.submit_guess("东南西北", &broken_on('西')).unwrap_err();

        assert!(matches!(
            err,
            GuessError::Processing {
                attempts: 1,
                reveal: None,
                ..
            }
        ));
        assert_eq!(s.attempts(), 1);
        assert_eq!(s.state(), SessionState::InProgress);
        assert!(s.history().is_empty());

        // Next guess goes through normally
        let report = s.submit_guess("春夏秋冬", &sample_table()).unwrap();
        assert_eq!(report.attempts, 2);
        assert!(report.is_won());
    }

    #[test]
    fn processing_error_on_last_attempt_exhausts() {
        let mut s = session("春夏秋冬", 1);
        let err = s.submit_guess("东南西北", &broken_on('东')).unwrap_err();

        let GuessError::Processing { reveal, .. } = err else {
            panic!("expected a processing error");
        };
        let reveal = reveal.unwrap();
        assert_eq!(reveal.target_word.text(), "春夏秋冬");
        assert_eq!(reveal.target_details[0].letters(), "chun");
        assert_eq!(s.state(), SessionState::Exhausted);
        assert_eq!(s.attempts(), s.max_attempts());
        assert!(s.reveal().is_some());
    }

    #[test]
    fn status_reflects_history() {
        let mut s = session("东南西北", 3);
        let table = sample_table();
        s.submit_guess("南北东西", &table).unwrap();

        let status = s.status();
        assert_eq!(status.attempts, 1);
        assert_eq!(status.max_attempts, 3);
        assert!(!status.finished);
        assert!(!status.won);
        assert_eq!(status.history.len(), 1);
        assert_eq!(status.reveal, None);

        let slots = status.history[0].outcome().slots();
        assert!(slots.iter().all(|slot| slot.character_feedback() == Feedback::Present));
    }

    #[test]
    fn start_picks_from_bank() {
        let bank = bank_from_slices(&[&["春夏秋冬", "东南西北"]]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let s = Session::start(&bank, limit(6), &sample_table(), &mut rng).unwrap();
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.state(), SessionState::InProgress);
    }

    #[test]
    fn start_fails_when_target_cannot_be_decomposed() {
        let bank = bank_from_slices(&[&["春夏秋冬"]]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let err = Session::start(&bank, limit(6), &broken_on('冬'), &mut rng).unwrap_err();
        assert_eq!(err.character, '冬');
    }

    #[test]
    fn status_serializes() {
        let mut s = session("春夏秋冬", 1);
        s.submit_guess("东南西北", &sample_table()).unwrap();

        let json = serde_json::to_value(s.status()).unwrap();
        assert_eq!(json["attempts"], 1);
        assert_eq!(json["finished"], true);
        assert_eq!(json["won"], false);
        assert_eq!(json["history"][0]["word"], "东南西北");
        assert_eq!(json["history"][0]["attempt"], 1);
        assert_eq!(json["reveal"]["target_word"], "春夏秋冬");
    }
}
