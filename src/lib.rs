//! Four-character word guessing game
//!
//! Guess a hidden four-character Chinese word. Every guess is scored slot by
//! slot on three channels: the character, the letters of its pinyin and its
//! tone.
//!
//! # Quick Start
//!
//! ```rust
//! use sizi_wordle::core::{GuessOutcome, decompose};
//! use sizi_wordle::transliterate::TableTransliterator;
//!
//! let table = TableTransliterator::from_pairs([
//!     ('春', "chun1"), ('夏', "xia4"), ('秋', "qiu1"), ('冬', "dong1"),
//!     ('东', "dong1"), ('南', "nan2"), ('西', "xi1"), ('北', "bei3"),
//! ]);
//!
//! let target = decompose("春夏秋冬", &table).unwrap();
//! let guess = decompose("东南西北", &table).unwrap();
//!
//! let outcome = GuessOutcome::evaluate(&target, &guess);
//! assert_eq!(outcome.count_exact_characters(), 0);
//! assert!(!outcome.is_perfect());
//! ```

// Core domain types
pub mod core;

// Pinyin sources
pub mod transliterate;

// Word banks
pub mod wordlists;

// Sessions and the game service
pub mod game;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// HTTP API
pub mod server;
