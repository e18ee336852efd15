//! Command implementations

pub mod compare;
pub mod simple;

pub use compare::{CompareResult, compare_words};
pub use simple::run_simple;
