//! Terminal output formatting
//!
//! Emoji rows and colored printing for the console commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_compare_result, print_guess_report, print_history, print_outcome, print_reveal,
    print_word_bank,
};
