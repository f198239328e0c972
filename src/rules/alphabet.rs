//! Letter-status aggregation
//!
//! Folds a guess history into one status per alphabet letter, for display as
//! a guessing aid.

use crate::core::{ALPHABET_SIZE, GuessHistory, letter_index};
use std::fmt;

/// What the history says about one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    /// Appears in the secret
    Confirmed,
    /// Does not appear in the secret
    Eliminated,
}

/// Status of each letter a-z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlphabetStatus([LetterStatus; ALPHABET_SIZE]);

impl Default for AlphabetStatus {
    fn default() -> Self {
        Self([LetterStatus::Unknown; ALPHABET_SIZE])
    }
}

impl AlphabetStatus {
    /// Status of a lowercase letter
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        self.0[letter_index(letter)]
    }

    /// Iterate over `(letter, status)` pairs from 'a' to 'z'
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied())
    }
}

/// Renders the alphabet string: `.` eliminated, lowercase unknown, UPPERCASE confirmed
impl fmt::Display for AlphabetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, status) in self.iter() {
            let ch = match status {
                LetterStatus::Unknown => char::from(letter),
                LetterStatus::Confirmed => char::from(letter.to_ascii_uppercase()),
                LetterStatus::Eliminated => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Compute the status of every letter from the guess history
///
/// Records are folded in turn order and the last write for a letter wins:
/// an `Absent` mark eliminates the letter, any other mark confirms it.
/// Conflicting marks are not reported; they simply overwrite.
///
/// # Examples
/// ```
/// use wordle_rules::core::GuessHistory;
/// use wordle_rules::rules::compute_status;
///
/// let history: GuessHistory = ["apple:.pp..", "touch:.OUCH"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// assert_eq!(compute_status(&history).to_string(), ".bCd.fgHijk.mnOPqrs.Uvwxyz");
/// ```
#[must_use]
pub fn compute_status(history: &GuessHistory) -> AlphabetStatus {
    let mut alphabet = AlphabetStatus::default();

    for record in history {
        for (_, letter, mark) in record.positions() {
            alphabet.0[letter_index(letter)] = if mark.is_in_secret() {
                LetterStatus::Confirmed
            } else {
                LetterStatus::Eliminated
            };
        }
    }

    alphabet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessRecord, Word};

    fn history(pairs: &[&str]) -> GuessHistory {
        pairs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn empty_history_is_all_unknown() {
        let alphabet = compute_status(&GuessHistory::new());
        assert_eq!(alphabet.to_string(), "abcdefghijklmnopqrstuvwxyz");
        assert!(alphabet.iter().all(|(_, s)| s == LetterStatus::Unknown));
    }

    #[test]
    fn single_guess() {
        let alphabet = compute_status(&history(&["apple:.pp.."]));
        assert_eq!(alphabet.status(b'a'), LetterStatus::Eliminated);
        assert_eq!(alphabet.status(b'p'), LetterStatus::Confirmed);
        assert_eq!(alphabet.status(b'l'), LetterStatus::Eliminated);
        assert_eq!(alphabet.status(b'z'), LetterStatus::Unknown);
        assert_eq!(alphabet.to_string(), ".bcd.fghijk.mnoPqrstuvwxyz");
    }

    #[test]
    fn later_records_overwrite_earlier_ones() {
        // e eliminated by the first record, confirmed by the second
        let alphabet = compute_status(&history(&["eerie:.....", "their:..E.."]));
        assert_eq!(alphabet.status(b'e'), LetterStatus::Confirmed);

        // and the other way round
        let alphabet = compute_status(&history(&["their:..E..", "eerie:....."]));
        assert_eq!(alphabet.status(b'e'), LetterStatus::Eliminated);
    }

    #[test]
    fn within_a_record_rightmost_mark_wins() {
        // secret "place": second p of "paper" is Present, both marks confirm p
        let record = GuessRecord::evaluated(&Word::new("place").unwrap(), Word::new("paper").unwrap());
        let alphabet = compute_status(&std::iter::once(record).collect());
        assert_eq!(alphabet.status(b'p'), LetterStatus::Confirmed);
        assert_eq!(alphabet.status(b'r'), LetterStatus::Eliminated);

        let alphabet = compute_status(&history(&["eerie:E...."]));
        assert_eq!(alphabet.status(b'e'), LetterStatus::Eliminated);
    }

    #[test]
    fn recomputing_is_idempotent() {
        let h = history(&["funky:.....", "plane:pla.E"]);
        assert_eq!(compute_status(&h), compute_status(&h));
    }
}
