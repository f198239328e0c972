//! Core domain types for Wordle
//!
//! Words, feedback marks, the feedback evaluator, and guess histories.
//! Everything here is pure; no function mutates a history it is given.

mod feedback;
mod history;
mod word;

pub use feedback::{Feedback, Mark, evaluate};
pub use history::{FeedbackParseError, GuessHistory, GuessRecord};
pub use word::{ALPHABET_SIZE, Word, WordError, letter_index};
