//! Solution finding
//!
//! Filters a dictionary down to the words still consistent with every guess
//! in a history, in two phases:
//! 1. Per-position checks against each record: `Correct` letters must match,
//!    `Present` and `Absent` letters must not sit at the guessed spot.
//! 2. Global letter checks: every letter ever marked `Present` must appear
//!    somewhere, and no letter ever marked `Absent` may appear anywhere.

use crate::core::{GuessHistory, Mark, Word};
use crate::wordlists::WordList;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Letters the whole history requires or forbids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterConstraints {
    must_appear: FxHashSet<u8>,
    must_not_appear: FxHashSet<u8>,
}

impl LetterConstraints {
    /// Collect the constraints from every record in the history
    #[must_use]
    pub fn from_history(history: &GuessHistory) -> Self {
        let mut constraints = Self::default();
        for record in history {
            for (_, letter, mark) in record.positions() {
                match mark {
                    Mark::Present => {
                        constraints.must_appear.insert(letter);
                    }
                    Mark::Absent => {
                        constraints.must_not_appear.insert(letter);
                    }
                    Mark::Correct => {}
                }
            }
        }
        constraints
    }

    /// Phase 2: the global letter-presence check
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        self.must_appear.iter().all(|&l| candidate.has_letter(l))
            && !self.must_not_appear.iter().any(|&l| candidate.has_letter(l))
    }
}

/// Phase 1: position-by-position agreement with every record
#[must_use]
pub fn matches_positions(candidate: &Word, history: &GuessHistory) -> bool {
    history.iter().all(|record| {
        debug_assert_eq!(
            record.guess().len(),
            candidate.len(),
            "dictionary words must match the history's word length"
        );
        record.positions().all(|(k, letter, mark)| match mark {
            Mark::Correct => candidate.letter_at(k) == letter,
            Mark::Present | Mark::Absent => candidate.letter_at(k) != letter,
        })
    })
}

/// Whether `candidate` could still be the secret
#[must_use]
pub fn is_candidate(candidate: &Word, history: &GuessHistory, constraints: &LetterConstraints) -> bool {
    matches_positions(candidate, history) && constraints.admits(candidate)
}

/// All dictionary words consistent with the history, in dictionary order
#[must_use]
pub fn all_solutions<'a>(history: &GuessHistory, word_list: &'a WordList) -> Vec<&'a Word> {
    let constraints = LetterConstraints::from_history(history);

    // Collecting an indexed parallel iterator keeps dictionary order
    let solutions: Vec<&Word> = word_list
        .words()
        .par_iter()
        .filter(|&candidate| is_candidate(candidate, history, &constraints))
        .collect();

    debug!(
        "{} of {} words consistent with {} guesses",
        solutions.len(),
        word_list.len(),
        history.len()
    );
    solutions
}

/// Find up to `max_solutions` dictionary words consistent with the history
///
/// Results keep the dictionary's ascending order; a cap smaller than the
/// number of consistent words truncates the tail. `max_solutions` must be at
/// least 1.
///
/// # Examples
/// ```
/// use wordle_rules::core::GuessHistory;
/// use wordle_rules::rules::find_solutions;
/// use wordle_rules::wordlists::WordList;
///
/// let history: GuessHistory = ["funky:.....", "plane:pla.E"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let solutions = find_solutions(&history, WordList::embedded(), 20);
/// let texts: Vec<&str> = solutions.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["ample", "apple", "lapse", "maple"]);
/// ```
#[must_use]
pub fn find_solutions<'a>(
    history: &GuessHistory,
    word_list: &'a WordList,
    max_solutions: usize,
) -> Vec<&'a Word> {
    debug_assert!(max_solutions >= 1, "max_solutions must be at least 1");

    let mut solutions = all_solutions(history, word_list);
    solutions.truncate(max_solutions);
    solutions
}
