//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessOutcome, SlotFeedback};

/// Format a run of feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: impl IntoIterator<Item = Feedback>) -> String {
    feedback.into_iter().map(Feedback::emoji).collect()
}

/// Character row: one square per slot
#[must_use]
pub fn character_row(outcome: &GuessOutcome) -> String {
    feedback_to_emoji(outcome.slots().iter().map(SlotFeedback::character_feedback))
}

/// Pinyin row: the squares of each slot's letters, slots separated by a space
///
/// Slots without a reading show a single `·`.
#[must_use]
pub fn letter_row(outcome: &GuessOutcome) -> String {
    outcome
        .slots()
        .iter()
        .map(|slot| {
            if slot.letter_feedback().is_empty() {
                "·".to_string()
            } else {
                feedback_to_emoji(slot.letter_feedback().iter().copied())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tone row: one square per slot
#[must_use]
pub fn tone_row(outcome: &GuessOutcome) -> String {
    feedback_to_emoji(outcome.slots().iter().map(SlotFeedback::tone_feedback))
}

/// Pinyin of every slot, aligned with `letter_row`
#[must_use]
pub fn pinyin_line(outcome: &GuessOutcome) -> String {
    outcome
        .slots()
        .iter()
        .map(|slot| match slot.tone() {
            Some(tone) => format!("{}{tone}", slot.letters()),
            None if slot.letters().is_empty() => "?".to_string(),
            None => slot.letters().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
