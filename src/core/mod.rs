//! Core domain types for the game
//!
//! Words, per-character records, decomposition and the three-channel
//! evaluator. Everything here is pure: no session state, no I/O.

mod decompose;
mod feedback;
mod record;
mod word;

pub use decompose::{DecomposeError, Decomposition, decompose, decompose_char, decompose_word};
pub use feedback::{Feedback, GuessOutcome, SlotFeedback};
pub use record::{CharacterRecord, Tone};
pub use word::{WORD_LEN, Word, WordError};
