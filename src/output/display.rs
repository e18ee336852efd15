//! Display functions for game results

use super::formatters::{character_row, create_progress_bar, letter_row, pinyin_line, tone_row};
use crate::commands::CompareResult;
use crate::core::{CharacterRecord, Feedback, GuessOutcome, SlotFeedback};
use crate::game::{GuessRecord, GuessReport, Reveal};
use crate::wordlists::WordBank;
use colored::{ColoredString, Colorize};

/// Color a piece of text by its feedback
fn paint(text: &str, feedback: Feedback) -> ColoredString {
    match feedback {
        Feedback::Exact => text.bright_blue().bold(),
        Feedback::Present => text.bright_yellow(),
        Feedback::Absent => text.bright_black(),
    }
}

fn colored_pinyin(slot: &SlotFeedback) -> String {
    if slot.letters().is_empty() {
        return "?".bright_black().to_string();
    }
    let mut out: String = slot
        .scored_letters()
        .map(|(letter, feedback)| paint(&letter.to_string(), feedback).to_string())
        .collect();
    if let Some(tone) = slot.tone() {
        out.push_str(&paint(&tone.to_string(), slot.tone_feedback()).to_string());
    }
    out
}

/// Print the three feedback rows of one guess
pub fn print_outcome(outcome: &GuessOutcome) {
    let word: String = outcome
        .slots()
        .iter()
        .map(|slot| {
            paint(&slot.character().to_string(), slot.character_feedback()).to_string()
        })
        .collect();
    let pinyin: Vec<String> = outcome.slots().iter().map(colored_pinyin).collect();

    println!("  {word}   {}", pinyin.join(" "));
    println!("  Characters: {}", character_row(outcome));
    println!("  Pinyin:     {}", letter_row(outcome));
    println!("  Tones:      {}", tone_row(outcome));
}

/// Print an accepted guess and the attempts left
pub fn print_guess_report(report: &GuessReport) {
    println!();
    print_outcome(&report.outcome);
    println!(
        "  [{}] {}/{}",
        create_progress_bar(report.attempts, report.max_attempts, 15).cyan(),
        report.attempts,
        report.max_attempts
    );

    if report.is_won() {
        println!(
            "\n{}",
            format!("🎉 Solved on attempt {}!", report.attempts)
                .green()
                .bold()
        );
    } else if let Some(reveal) = &report.reveal {
        println!("\n{}", "😞 Out of attempts!".red().bold());
        print_reveal(reveal);
    } else {
        println!("  {} attempts left", report.remaining());
    }
}

/// Print the target word and its breakdown
pub fn print_reveal(reveal: &Reveal) {
    println!(
        "The answer was {}",
        reveal.target_word.text().bright_yellow().bold()
    );
    for record in &reveal.target_details {
        println!("  {record}");
    }
}

/// Print a guess history, one line per guess
pub fn print_history(history: &[GuessRecord]) {
    for record in history {
        println!(
            "  {}. {} {}",
            record.attempt().to_string().bright_black(),
            record.word().text().bright_white().bold(),
            character_row(record.outcome())
        );
    }
}

/// Print the result of the `compare` command
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "─".repeat(48).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target_word.text().bright_yellow().bold(),
        result.guess_word.text().bright_white().bold()
    );
    println!("{}", "─".repeat(48).cyan());

    println!("\nTarget breakdown:");
    print_records(&result.target);
    println!("\nGuess breakdown:");
    print_records(&result.guess);

    println!("\nFeedback:");
    print_outcome(&result.outcome);
    println!("  ({})", pinyin_line(&result.outcome).bright_black());

    if result.outcome.is_perfect() {
        println!("\n{}", "✅ Perfect match".green().bold());
    } else {
        println!(
            "\n{} of 4 characters in place",
            result.outcome.count_exact_characters()
        );
    }
}

fn print_records(records: &[CharacterRecord]) {
    for record in records {
        if record.is_unknown() {
            println!("  {} - {}", record.character(), "no reading".bright_black());
        } else {
            println!("  {record}");
        }
    }
}

/// Print every word in a bank
pub fn print_word_bank(bank: &WordBank) {
    println!(
        "{} {}",
        bank.len().to_string().bright_cyan().bold(),
        "words".bright_cyan()
    );
    for (i, word) in bank.words().iter().enumerate() {
        println!("  {:>3}. {word}", i + 1);
    }
}
