//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::game::{GameError, GameService, GuessError, SessionId, SessionStore};
use crate::output::{print_guess_report, print_history, print_reveal};
use crate::transliterate::Transliterator;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// How a single game ended
enum GameEnd {
    Finished,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if a game cannot be started.
pub fn run_simple<S: SessionStore, T: Transliterator>(service: &GameService<S, T>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Four-Character Word Guess                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden four-character word.");
    println!("Each guess is scored on three channels:\n");
    println!("  - Characters, pinyin letters and tones");
    println!("  - 🟦 right place, 🟨 elsewhere in the word, ⬜ not in the word\n");
    println!("Commands: 'quit' to exit, 'history' to review your guesses\n");

    loop {
        let started = service.start().context("failed to start a game")?;
        println!(
            "{}",
            format!("New game! You have {} attempts.", started.max_attempts)
                .bright_cyan()
                .bold()
        );

        let end = play_one(service, &started.game_id)?;
        service.end(&started.game_id);

        if matches!(end, GameEnd::Quit) || !ask_play_again()? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
        println!();
    }
}

fn play_one<S: SessionStore, T: Transliterator>(
    service: &GameService<S, T>,
    id: &SessionId,
) -> Result<GameEnd> {
    loop {
        let status = service.status(id)?;
        let prompt = format!("\nGuess {}/{}", status.attempts + 1, status.max_attempts);

        let Some(input) = get_user_input(&prompt)? else {
            return Ok(GameEnd::Quit);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
            "history" | "h" => {
                if status.history.is_empty() {
                    println!("No guesses yet");
                } else {
                    print_history(&status.history);
                }
                continue;
            }
            _ => {}
        }

        match service.guess(id, &input) {
            Ok(report) => {
                print_guess_report(&report);
                if report.is_finished() {
                    return Ok(GameEnd::Finished);
                }
            }
            Err(GameError::Guess(GuessError::InvalidLength(err))) => {
                println!("❌ {err}, try again");
            }
            Err(GameError::Guess(err @ GuessError::Processing { .. })) => {
                println!("⚠️  {err} (the attempt still counts)");
                let status = service.status(id)?;
                if let Some(reveal) = status.reveal {
                    println!("\n{}", "😞 Out of attempts!".red().bold());
                    print_reveal(&reveal);
                    return Ok(GameEnd::Finished);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn ask_play_again() -> Result<bool> {
    loop {
        let Some(input) = get_user_input("\nPlay again? (y/n)")? else {
            return Ok(false);
        };
        match parse_play_again(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer y or n"),
        }
    }
}

/// Interpret a yes/no answer, in English or Chinese
fn parse_play_again(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "是" | "好" => Some(true),
        "n" | "no" | "否" | "不" => Some(false),
        _ => None,
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    if read == 0 {
        debug!("stdin closed");
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_again_answers() {
        for yes in ["y", "Y", "yes", " YES ", "是", "好"] {
            assert_eq!(parse_play_again(yes), Some(true), "{yes}");
        }
        for no in ["n", "No", "否", "不"] {
            assert_eq!(parse_play_again(no), Some(false), "{no}");
        }
        assert_eq!(parse_play_again("maybe"), None);
        assert_eq!(parse_play_again(""), None);
    }
}
