//! Guess records and the ordered guess history of one game
//!
//! A record renders to, and parses from, the result-string convention used
//! by the terminal front end:
//! - UPPERCASE letter = Correct
//! - lowercase letter = Present
//! - `.` (period)     = Absent
//!
//! e.g. guess `"paper"` against secret `"apple"` renders as `"paPe."`.

use super::{Feedback, Mark, Word, WordError, evaluate};
use std::fmt;

/// A guess paired with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

/// Error type for result strings that don't describe a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    InvalidGuess(WordError),
    LengthMismatch { expected: usize, actual: usize },
    InvalidCharacter { position: usize, found: char },
    LetterMismatch { position: usize, expected: char, found: char },
    MissingSeparator(String),
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Result must be {expected} characters, got {actual}")
            }
            Self::InvalidCharacter { position, found } => {
                write!(f, "Invalid result character '{found}' at position {position}")
            }
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "Result letter '{found}' at position {position} does not match guess letter '{expected}'"
            ),
            Self::MissingSeparator(s) => {
                write!(f, "Expected GUESS:RESULT (e.g. plane:pla.E), got '{s}'")
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}

impl From<WordError> for FeedbackParseError {
    fn from(e: WordError) -> Self {
        Self::InvalidGuess(e)
    }
}

impl GuessRecord {
    /// Pair a guess with its feedback
    ///
    /// The feedback must have one mark per guess letter.
    #[must_use]
    pub fn new(guess: Word, feedback: Feedback) -> Self {
        debug_assert_eq!(
            guess.len(),
            feedback.len(),
            "feedback must have one mark per guess letter"
        );
        Self { guess, feedback }
    }

    /// Evaluate `guess` against `secret` and record the result
    #[must_use]
    pub fn evaluated(secret: &Word, guess: Word) -> Self {
        let (feedback, _) = evaluate(secret, &guess);
        Self { guess, feedback }
    }

    /// Parse a result string for `guess`
    ///
    /// # Errors
    /// Returns `FeedbackParseError` if the result has the wrong length, contains
    /// anything other than letters and `.`, or a letter differs from the guess
    /// letter at that position.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::{GuessRecord, Mark, Word};
    ///
    /// let record = GuessRecord::parse(Word::new("plane").unwrap(), "pla.E").unwrap();
    /// assert_eq!(record.feedback()[3], Mark::Absent);
    /// assert_eq!(record.feedback()[4], Mark::Correct);
    /// assert_eq!(record.to_string(), "pla.E");
    /// ```
    pub fn parse(guess: Word, result: &str) -> Result<Self, FeedbackParseError> {
        let chars: Vec<char> = result.chars().collect();
        if chars.len() != guess.len() {
            return Err(FeedbackParseError::LengthMismatch {
                expected: guess.len(),
                actual: chars.len(),
            });
        }

        let mut marks = Vec::with_capacity(chars.len());
        for (position, (&ch, &letter)) in chars.iter().zip(guess.letters()).enumerate() {
            let expected = char::from(letter);
            let mark = match ch {
                '.' => Mark::Absent,
                c if c.is_ascii_uppercase() => Mark::Correct,
                c if c.is_ascii_lowercase() => Mark::Present,
                found => return Err(FeedbackParseError::InvalidCharacter { position, found }),
            };
            if mark != Mark::Absent && ch.to_ascii_lowercase() != expected {
                return Err(FeedbackParseError::LetterMismatch {
                    position,
                    expected,
                    found: ch,
                });
            }
            marks.push(mark);
        }

        Ok(Self {
            guess,
            feedback: Feedback::new(marks),
        })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback the guess received
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Iterate over `(position, letter, mark)` triples
    pub fn positions(&self) -> impl Iterator<Item = (usize, u8, Mark)> + '_ {
        self.guess
            .letters()
            .iter()
            .zip(self.feedback.iter())
            .enumerate()
            .map(|(i, (&letter, &mark))| (i, letter, mark))
    }

    /// Whether this guess solved the game
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}

/// Renders the result string, e.g. `"paPe."`
impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, letter, mark) in self.positions() {
            let ch = match mark {
                Mark::Correct => char::from(letter.to_ascii_uppercase()),
                Mark::Present => char::from(letter),
                Mark::Absent => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Parses `GUESS:RESULT`, e.g. `"plane:pla.E"`
impl std::str::FromStr for GuessRecord {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, result) = s
            .split_once(':')
            .ok_or_else(|| FeedbackParseError::MissingSeparator(s.to_string()))?;
        Self::parse(Word::new(guess.trim())?, result.trim())
    }
}

/// Ordered guess history of one game; insertion order is turn order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    records: Vec<GuessRecord>,
}

impl GuessHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append the next turn's record
    ///
    /// Every record in a history must have the same word length.
    pub fn push(&mut self, record: GuessRecord) {
        debug_assert!(
            self.word_length()
                .is_none_or(|len| len == record.guess().len()),
            "all guesses in a history must have the same length"
        );
        self.records.push(record);
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length of the words in this history, if any guess has been made
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.records.first().map(|r| r.guess().len())
    }

    /// The most recent record
    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }
}

impl FromIterator<GuessRecord> for GuessHistory {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        let mut history = Self::new();
        for record in iter {
            history.push(record);
        }
        history
    }
}

impl<'a> IntoIterator for &'a GuessHistory {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn evaluated_record_renders_result_string() {
        let record = GuessRecord::evaluated(&word("apple"), word("paper"));
        assert_eq!(record.to_string(), "paPe.");

        let record = GuessRecord::evaluated(&word("place"), word("paper"));
        assert_eq!(record.to_string(), "Pape.");
    }

    #[test]
    fn parse_result_string() {
        let record = GuessRecord::parse(word("apple"), ".pp..").unwrap();
        assert_eq!(
            record.feedback().marks(),
            &[Absent, Present, Present, Absent, Absent]
        );

        let record = GuessRecord::parse(word("touch"), ".OUCH").unwrap();
        assert_eq!(
            record.feedback().marks(),
            &[Absent, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn parse_rejects_bad_results() {
        assert_eq!(
            GuessRecord::parse(word("apple"), ".pp."),
            Err(FeedbackParseError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            GuessRecord::parse(word("apple"), ".pp.-"),
            Err(FeedbackParseError::InvalidCharacter {
                position: 4,
                found: '-'
            })
        );
        assert_eq!(
            GuessRecord::parse(word("apple"), ".px.."),
            Err(FeedbackParseError::LetterMismatch {
                position: 2,
                expected: 'p',
                found: 'x'
            })
        );
    }

    #[test]
    fn from_str_guess_result_pair() {
        let record: GuessRecord = "plane:pla.E".parse().unwrap();
        assert_eq!(record.guess().text(), "plane");
        assert_eq!(record.to_string(), "pla.E");

        assert!(matches!(
            "plane".parse::<GuessRecord>(),
            Err(FeedbackParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "pl4ne:pla.E".parse::<GuessRecord>(),
            Err(FeedbackParseError::InvalidGuess(_))
        ));
    }

    #[test]
    fn positions_yield_letter_and_mark() {
        let record = GuessRecord::parse(word("plane"), "pla.E").unwrap();
        let triples: Vec<_> = record.positions().collect();
        assert_eq!(triples[0], (0, b'p', Present));
        assert_eq!(triples[3], (3, b'n', Absent));
        assert_eq!(triples[4], (4, b'e', Correct));
    }

    #[test]
    fn history_keeps_turn_order() {
        let history: GuessHistory = ["funky:.....", "plane:pla.E"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        assert_eq!(history.len(), 2);
        assert_eq!(history.word_length(), Some(5));
        assert_eq!(history.records()[0].guess().text(), "funky");
        assert_eq!(history.last().unwrap().guess().text(), "plane");
        assert!(GuessHistory::new().word_length().is_none());
    }

    #[test]
    fn solved_record() {
        let record = GuessRecord::evaluated(&word("crane"), word("crane"));
        assert!(record.is_solved());
        assert_eq!(record.to_string(), "CRANE");
    }
}
