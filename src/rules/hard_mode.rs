//! Hard-mode guess validation
//!
//! In hard mode any revealed hint must be used by every later guess:
//! - a `Correct` letter must stay in the same spot
//! - a `Present` letter must not be reused in the same spot, and must appear elsewhere
//! - an `Absent` letter must not appear anywhere
//!
//! The `Absent` ban applies to the letter as a whole, even when the same record
//! marks another copy of that letter `Correct` or `Present`.

use crate::core::{GuessHistory, Mark, Word};
use log::trace;
use std::fmt;

/// The first hint a guess fails to respect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A `Correct` letter was moved or dropped
    MissingCorrect { position: usize, letter: u8 },
    /// A letter marked `Absent` was used again
    UsedAbsent { letter: u8 },
    /// A `Present` letter was placed where it is known not to be
    RepeatedPresent { position: usize, letter: u8 },
    /// A `Present` letter was left out
    UnusedPresent { letter: u8 },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MissingCorrect { position, letter } => write!(
                f,
                "position {} must be {}",
                position + 1,
                char::from(letter.to_ascii_uppercase())
            ),
            Self::UsedAbsent { letter } => write!(
                f,
                "{} is not in the word",
                char::from(letter.to_ascii_uppercase())
            ),
            Self::RepeatedPresent { position, letter } => write!(
                f,
                "{} is not at position {}",
                char::from(letter.to_ascii_uppercase()),
                position + 1
            ),
            Self::UnusedPresent { letter } => write!(
                f,
                "guess must contain {}",
                char::from(letter.to_ascii_uppercase())
            ),
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `next_guess` against every hint in the history
///
/// Records are checked in turn order and positions left to right; the first
/// violation found is returned.
///
/// # Errors
/// Returns the first `HardModeViolation` encountered.
pub fn check_hard_guess(history: &GuessHistory, next_guess: &Word) -> Result<(), HardModeViolation> {
    for record in history {
        debug_assert_eq!(
            record.guess().len(),
            next_guess.len(),
            "next guess must match the history's word length"
        );

        for (position, letter, mark) in record.positions() {
            let violation = match mark {
                Mark::Correct if next_guess.letter_at(position) != letter => {
                    Some(HardModeViolation::MissingCorrect { position, letter })
                }
                Mark::Absent if next_guess.has_letter(letter) => {
                    Some(HardModeViolation::UsedAbsent { letter })
                }
                Mark::Present if next_guess.letter_at(position) == letter => {
                    Some(HardModeViolation::RepeatedPresent { position, letter })
                }
                Mark::Present if !next_guess.has_letter_except_at(letter, position) => {
                    Some(HardModeViolation::UnusedPresent { letter })
                }
                _ => None,
            };

            if let Some(violation) = violation {
                trace!(
                    "hard mode rejects {next_guess} against {}: {violation}",
                    record.guess()
                );
                return Err(violation);
            }
        }
    }

    Ok(())
}

/// Whether `next_guess` is legal in hard mode given the history
///
/// # Examples
/// ```
/// use wordle_rules::core::{GuessHistory, Word};
/// use wordle_rules::rules::is_valid_hard_guess;
///
/// let history: GuessHistory = std::iter::once("apple:.pp..".parse().unwrap()).collect();
///
/// assert!(!is_valid_hard_guess(&history, &Word::new("touch").unwrap()));
/// assert!(is_valid_hard_guess(&history, &Word::new("pouch").unwrap()));
/// assert!(!is_valid_hard_guess(&history, &Word::new("spout").unwrap()));
/// ```
#[must_use]
pub fn is_valid_hard_guess(history: &GuessHistory, next_guess: &Word) -> bool {
    check_hard_guess(history, next_guess).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRecord;

    fn history(pairs: &[&str]) -> GuessHistory {
        pairs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn check(pairs: &[&str], next: &str) -> Result<(), HardModeViolation> {
        check_hard_guess(&history(pairs), &Word::new(next).unwrap())
    }

    #[test]
    fn empty_history_accepts_anything() {
        assert_eq!(check(&[], "zzzzz"), Ok(()));
    }

    #[test]
    fn apple_examples() {
        let h = ["apple:.pp.."];

        assert_eq!(
            check(&h, "touch"),
            Err(HardModeViolation::UnusedPresent { letter: b'p' })
        );
        assert_eq!(check(&h, "pouch"), Ok(()));
        assert_eq!(
            check(&h, "spout"),
            Err(HardModeViolation::RepeatedPresent {
                position: 1,
                letter: b'p'
            })
        );
    }

    #[test]
    fn correct_letter_must_stay() {
        let h = ["touch:.OUCH"];
        assert_eq!(check(&h, "vouch"), Ok(()));
        assert_eq!(
            check(&h, "ouchy"),
            Err(HardModeViolation::MissingCorrect {
                position: 1,
                letter: b'o'
            })
        );
    }

    #[test]
    fn absent_letter_banned_everywhere() {
        assert_eq!(
            check(&["touch:.OUCH"], "pouty"),
            Err(HardModeViolation::UsedAbsent { letter: b't' })
        );
    }

    #[test]
    fn first_violation_in_position_order() {
        // t (Absent, position 0) is reported before the missing C/H
        assert_eq!(
            check(&["touch:.OUCH"], "trout"),
            Err(HardModeViolation::UsedAbsent { letter: b't' })
        );
    }

    #[test]
    fn records_checked_in_turn_order() {
        let h = ["funky:.....", "plane:pla.E"];
        assert_eq!(check(&h, "maple"), Ok(()));
        assert_eq!(
            check(&h, "unfit"),
            Err(HardModeViolation::UsedAbsent { letter: b'f' })
        );
        assert_eq!(
            check(&h, "sable"),
            Err(HardModeViolation::UnusedPresent { letter: b'p' })
        );
    }

    #[test]
    fn absent_copy_bans_letter_confirmed_elsewhere() {
        // e is Correct at position 2 but Absent at position 3 of the same record
        let record = GuessRecord::parse(Word::new("sheet").unwrap(), "..E..").unwrap();
        let h: GuessHistory = std::iter::once(record).collect();
        let creed = Word::new("creed").unwrap();

        assert!(!is_valid_hard_guess(&h, &creed));
        assert_eq!(
            check_hard_guess(&h, &creed),
            Err(HardModeViolation::UsedAbsent { letter: b'e' })
        );
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            HardModeViolation::MissingCorrect {
                position: 4,
                letter: b'e'
            }
            .to_string(),
            "position 5 must be E"
        );
        assert_eq!(
            HardModeViolation::UnusedPresent { letter: b'p' }.to_string(),
            "guess must contain P"
        );
    }
}
