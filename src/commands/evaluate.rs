//! Evaluate command
//!
//! Computes the feedback a guess receives against a secret.

use crate::core::{GuessRecord, Word, evaluate};

/// Result of evaluating one guess
#[derive(Debug)]
pub struct EvaluationResult {
    pub record: GuessRecord,
    pub exact: bool,
}

/// Evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn evaluate_words(secret: &str, guess: &str) -> Result<EvaluationResult, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::with_length(guess, secret.len()).map_err(|e| format!("Invalid guess: {e}"))?;

    let (feedback, exact) = evaluate(&secret, &guess);
    Ok(EvaluationResult {
        record: GuessRecord::new(guess, feedback),
        exact,
    })
}
