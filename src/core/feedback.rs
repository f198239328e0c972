//! Per-letter feedback for a guess
//!
//! Each position of a guess receives one of three marks:
//! - Correct = letter is in the secret at this position
//! - Present = letter occurs somewhere in the secret, but not here
//! - Absent  = letter does not occur in the secret
//!
//! Repeated guess letters are judged independently against the secret's total
//! letter counts: against `"apple"`, both `p`s of `"paper"` are marked no
//! matter how many `p`s were already matched elsewhere.

use super::word::letter_index;
use super::Word;
use std::ops::Index;

/// Feedback tag for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square used for display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Whether the mark shows the letter is in the secret
    #[inline]
    #[must_use]
    pub const fn is_in_secret(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Feedback for a whole guess, one [`Mark`] per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Wrap a sequence of marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// The marks, in position order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the marks
    pub fn iter(&self) -> std::slice::Iter<'_, Mark> {
        self.0.iter()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Render as a string of emoji squares, e.g. "🟨🟨🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a Mark;
    type IntoIter = std::slice::Iter<'a, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compare `guess` against `secret`
///
/// Returns the feedback and whether the guess is an exact match.
///
/// # Algorithm
/// 1. Count each letter of the secret
/// 2. First pass: mark exact position matches `Correct`
/// 3. Second pass: mark each remaining position `Present` if the secret contains
///    that letter at all, else `Absent`
///
/// Both words must have the same length.
///
/// # Examples
/// ```
/// use wordle_rules::core::{evaluate, Mark, Word};
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// let (feedback, exact) = evaluate(&secret, &guess);
///
/// assert!(!exact);
/// assert_eq!(
///     feedback.marks(),
///     &[Mark::Present, Mark::Present, Mark::Correct, Mark::Present, Mark::Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> (Feedback, bool) {
    debug_assert_eq!(
        secret.len(),
        guess.len(),
        "secret and guess must have the same length"
    );

    let secret_counts = secret.letter_counts();
    let mut marks = vec![Mark::Absent; guess.len()];

    // First pass: exact position matches
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            marks[i] = Mark::Correct;
        }
    }

    // Second pass: anything else the secret contains
    for (mark, &g) in marks.iter_mut().zip(guess.letters()) {
        if *mark != Mark::Correct && secret_counts[letter_index(g)] > 0 {
            *mark = Mark::Present;
        }
    }

    let exact = secret == guess;
    (Feedback(marks), exact)
}
