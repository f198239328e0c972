//! Derived views over a guess history
//!
//! None of these functions mutate the history they are given.

pub mod alphabet;
pub mod finder;
pub mod hard_mode;

pub use alphabet::{AlphabetStatus, LetterStatus, compute_status};
pub use finder::{LetterConstraints, all_solutions, find_solutions};
pub use hard_mode::{HardModeViolation, check_hard_guess, is_valid_hard_guess};
