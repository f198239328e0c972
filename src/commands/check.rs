//! Hard-mode check and dictionary lookup commands

use super::parse_history;
use crate::core::Word;
use crate::rules::{HardModeViolation, check_hard_guess};
use crate::wordlists::WordList;

/// Result of checking a hard-mode guess
#[derive(Debug)]
pub struct HardCheckResult {
    pub guess: String,
    pub violation: Option<HardModeViolation>,
}

impl HardCheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

/// Check whether `next` respects every hint in `pairs` (`GUESS:RESULT` strings)
///
/// # Errors
///
/// Returns an error if `next` or the history can't be parsed, or their
/// lengths differ.
pub fn check_hard<S: AsRef<str>>(next: &str, pairs: &[S]) -> Result<HardCheckResult, String> {
    let next = Word::new(next).map_err(|e| format!("Invalid guess: {e}"))?;
    let history = parse_history(pairs, next.len())?;

    Ok(HardCheckResult {
        guess: next.text().to_string(),
        violation: check_hard_guess(&history, &next).err(),
    })
}

/// Result of a dictionary lookup
#[derive(Debug)]
pub struct LookupResult {
    pub word: String,
    pub index: Option<usize>,
}

/// Find `word` in the dictionary
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn lookup_word(word: &str, dictionary: &WordList) -> Result<LookupResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    Ok(LookupResult {
        index: dictionary.locate(word.text()),
        word: word.text().to_string(),
    })
}
