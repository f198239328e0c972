//! Command implementations

pub mod check;
pub mod evaluate;
pub mod play;
pub mod solutions;

pub use check::{HardCheckResult, LookupResult, check_hard, lookup_word};
pub use evaluate::{EvaluationResult, evaluate_words};
pub use play::{PlayConfig, run_play};
pub use solutions::{SolutionsConfig, SolutionsResult, find_words};

use crate::core::{GuessHistory, GuessRecord};

/// Parse `GUESS:RESULT` arguments into a history of `word_length`-letter guesses
///
/// # Errors
///
/// Returns an error if any pair is malformed or has the wrong word length.
pub fn parse_history<S: AsRef<str>>(pairs: &[S], word_length: usize) -> Result<GuessHistory, String> {
    let mut history = GuessHistory::new();
    for pair in pairs {
        let record: GuessRecord = pair
            .as_ref()
            .parse()
            .map_err(|e| format!("Invalid guess '{}': {e}", pair.as_ref()))?;
        if record.guess().len() != word_length {
            return Err(format!(
                "Guess '{}' has {} letters, expected {word_length}",
                record.guess(),
                record.guess().len()
            ));
        }
        history.push(record);
    }
    Ok(history)
}
