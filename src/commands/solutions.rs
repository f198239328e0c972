//! Solutions command
//!
//! Lists dictionary words still consistent with a guess history.

use super::parse_history;
use crate::core::GuessHistory;
use crate::rules::{AlphabetStatus, all_solutions, compute_status};
use crate::wordlists::WordList;

/// Configuration for listing solutions
#[derive(Debug)]
pub struct SolutionsConfig {
    pub max_solutions: usize,
}

impl SolutionsConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_solutions: 20 }
    }
}

impl Default for SolutionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a solutions search
#[derive(Debug)]
pub struct SolutionsResult {
    pub history: GuessHistory,
    pub alphabet: AlphabetStatus,
    /// Consistent words, capped at `max_solutions`, in dictionary order
    pub solutions: Vec<String>,
    /// Number of consistent words before capping
    pub total: usize,
}

/// Find the dictionary words consistent with `pairs` (`GUESS:RESULT` strings)
///
/// # Errors
///
/// Returns an error if the history can't be parsed or the cap is zero.
pub fn find_words<S: AsRef<str>>(
    pairs: &[S],
    config: &SolutionsConfig,
    dictionary: &WordList,
) -> Result<SolutionsResult, String> {
    if config.max_solutions == 0 {
        return Err("Maximum number of solutions must be at least 1".to_string());
    }

    let history = parse_history(pairs, dictionary.word_length())?;
    let all = all_solutions(&history, dictionary);
    let total = all.len();
    let solutions = all
        .into_iter()
        .take(config.max_solutions)
        .map(|w| w.text().to_string())
        .collect();

    Ok(SolutionsResult {
        alphabet: compute_status(&history),
        history,
        solutions,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funky_plane_over_embedded_dictionary() {
        let result = find_words(
            &["funky:.....", "plane:pla.E"],
            &SolutionsConfig::new(),
            WordList::embedded(),
        )
        .unwrap();

        assert_eq!(result.solutions, ["ample", "apple", "lapse", "maple"]);
        assert_eq!(result.total, 4);
        assert_eq!(result.history.len(), 2);
    }

    #[test]
    fn cap_reports_full_total() {
        let config = SolutionsConfig { max_solutions: 2 };
        let result = find_words(&["funky:.....", "plane:pla.E"], &config, WordList::embedded()).unwrap();
        assert_eq!(result.solutions, ["ample", "apple"]);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn zero_cap_is_rejected() {
        let config = SolutionsConfig { max_solutions: 0 };
        assert!(find_words(&["plane:pla.E"], &config, WordList::embedded()).is_err());
    }
}
