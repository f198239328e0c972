//! Game session state

use crate::core::{GuessHistory, GuessRecord, Word, WordError, evaluate};
use crate::rules::{AlphabetStatus, HardModeViolation, all_solutions, check_hard_guess, compute_status};
use crate::wordlists::WordList;
use log::{debug, info};
use std::fmt;

/// Default number of guesses allowed per game
pub const MAX_TURNS: usize = 6;

/// How strictly guesses are checked before they are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Any word of the right length
    Easy,
    /// Guesses must be in the dictionary
    #[default]
    Normal,
    /// Dictionary words that also use every revealed hint
    Hard,
}

impl Difficulty {
    /// Difficulty from its numeric level (0 = easy, 1 = normal, 2 = hard)
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Easy),
            1 => Some(Self::Normal),
            2 => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn requires_dictionary(self) -> bool {
        matches!(self, Self::Normal | Self::Hard)
    }

    #[must_use]
    pub const fn is_hard(self) -> bool {
        matches!(self, Self::Hard)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        let parsed = match name.as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            level => level.parse().ok().and_then(Self::from_level),
        };
        parsed.ok_or_else(|| format!("Invalid difficulty: {s} (expected easy, normal or hard)"))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Configuration for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub max_turns: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            max_turns: MAX_TURNS,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Won { turns: usize },
    Lost { secret: Word },
    InProgress { remaining: usize },
}

/// Why a guess was refused; a refused guess does not use up a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessRejection {
    WrongLength { expected: usize, actual: usize },
    InvalidWord(WordError),
    NotInDictionary,
    HardModeViolation(HardModeViolation),
    GameOver,
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Wrong number of letters: expected {expected}, got {actual}")
            }
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::NotInDictionary => write!(f, "Word not in dictionary"),
            Self::HardModeViolation(v) => write!(f, "Invalid guess (hard mode): {v}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessRejection {}

/// One game against a fixed secret
pub struct Game<'a> {
    secret: Word,
    dictionary: &'a WordList,
    config: GameConfig,
    history: GuessHistory,
    finished: bool,
}

impl<'a> Game<'a> {
    /// Start a game
    ///
    /// The secret must have the dictionary's word length.
    #[must_use]
    pub fn new(secret: Word, dictionary: &'a WordList, config: GameConfig) -> Self {
        debug_assert_eq!(
            secret.len(),
            dictionary.word_length(),
            "secret must match the dictionary's word length"
        );
        debug_assert!(config.max_turns >= 1, "a game needs at least one turn");

        Self {
            secret,
            dictionary,
            config,
            history: GuessHistory::new(),
            finished: false,
        }
    }

    /// Submit a guess
    ///
    /// Input is trimmed and lowercased. Checks run in order: length, letters,
    /// dictionary (normal and hard), hard-mode hints (hard only).
    ///
    /// # Errors
    /// Returns a `GuessRejection` if the guess is refused; the turn is not used.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Word;
    /// use wordle_rules::game::{Difficulty, Game, GameConfig, TurnOutcome};
    /// use wordle_rules::wordlists::WordList;
    ///
    /// let secret = Word::new("apple").unwrap();
    /// let mut game = Game::new(secret, WordList::embedded(), GameConfig::new(Difficulty::Hard));
    ///
    /// assert_eq!(game.guess("paper"), Ok(TurnOutcome::InProgress { remaining: 5 }));
    /// assert_eq!(game.history().last().unwrap().to_string(), "paPe.");
    /// assert!(game.guess("touch").is_err());
    /// assert_eq!(game.guess("apple"), Ok(TurnOutcome::Won { turns: 2 }));
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<TurnOutcome, GuessRejection> {
        if self.finished {
            return Err(GuessRejection::GameOver);
        }

        let guess = self.validate(input)?;
        let (feedback, exact) = evaluate(&self.secret, &guess);
        self.history.push(GuessRecord::new(guess, feedback));

        let turns = self.history.len();
        let outcome = if exact {
            self.finished = true;
            info!("solved in {turns} turns");
            TurnOutcome::Won { turns }
        } else if turns >= self.config.max_turns {
            self.finished = true;
            info!("out of turns after {turns} guesses");
            TurnOutcome::Lost {
                secret: self.secret.clone(),
            }
        } else {
            TurnOutcome::InProgress {
                remaining: self.config.max_turns - turns,
            }
        };

        Ok(outcome)
    }

    fn validate(&self, input: &str) -> Result<Word, GuessRejection> {
        let text = input.trim().to_lowercase();
        let expected = self.secret.len();
        let actual = text.chars().count();
        if actual != expected {
            return Err(GuessRejection::WrongLength { expected, actual });
        }

        let guess = Word::new(text).map_err(GuessRejection::InvalidWord)?;

        if self.config.difficulty.requires_dictionary() && !self.dictionary.contains(&guess) {
            debug!("rejected {guess}: not in dictionary");
            return Err(GuessRejection::NotInDictionary);
        }

        if self.config.difficulty.is_hard() {
            check_hard_guess(&self.history, &guess).map_err(GuessRejection::HardModeViolation)?;
        }

        Ok(guess)
    }

    /// Letter status over the guesses so far
    #[must_use]
    pub fn alphabet(&self) -> AlphabetStatus {
        compute_status(&self.history)
    }

    /// Dictionary words still consistent with the guesses so far, capped at `max`
    #[must_use]
    pub fn candidates(&self, max: usize) -> Vec<&'a Word> {
        let mut candidates = all_solutions(&self.history, self.dictionary);
        candidates.truncate(max);
        candidates
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        self.config.max_turns.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// The secret word; reveal only once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str, difficulty: Difficulty) -> Game<'static> {
        Game::new(
            Word::new(secret).unwrap(),
            WordList::embedded(),
            GameConfig::new(difficulty),
        )
    }

    #[test]
    fn difficulty_parsing() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("0".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Normal ".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert!("3".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::from_level(2), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_level(3), None);
    }

    #[test]
    fn win_on_first_guess() {
        let mut g = game("apple", Difficulty::Normal);
        assert_eq!(g.guess("APPLE"), Ok(TurnOutcome::Won { turns: 1 }));
        assert!(g.is_finished());
        assert_eq!(g.guess("apple"), Err(GuessRejection::GameOver));
    }

    #[test]
    fn wrong_length_does_not_use_a_turn() {
        let mut g = game("apple", Difficulty::Easy);
        assert_eq!(
            g.guess("apples"),
            Err(GuessRejection::WrongLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(g.turn(), 0);
        assert_eq!(g.remaining_turns(), MAX_TURNS);
    }

    #[test]
    fn invalid_letters_rejected() {
        let mut g = game("apple", Difficulty::Easy);
        assert!(matches!(g.guess("ap9le"), Err(GuessRejection::InvalidWord(_))));
    }

    #[test]
    fn easy_mode_skips_dictionary() {
        let mut g = game("apple", Difficulty::Easy);
        assert_eq!(g.guess("xzxzx"), Ok(TurnOutcome::InProgress { remaining: 5 }));

        let mut g = game("apple", Difficulty::Normal);
        assert_eq!(g.guess("xzxzx"), Err(GuessRejection::NotInDictionary));
    }

    #[test]
    fn hard_mode_enforces_hints() {
        let mut g = game("apple", Difficulty::Hard);
        g.guess("paper").unwrap();
        // p was Present at position 0
        assert_eq!(
            g.guess("pride"),
            Err(GuessRejection::HardModeViolation(
                HardModeViolation::RepeatedPresent {
                    position: 0,
                    letter: b'p'
                }
            ))
        );
        assert_eq!(g.turn(), 1);

        // normal mode would accept it
        let mut g = game("apple", Difficulty::Normal);
        g.guess("paper").unwrap();
        assert!(g.guess("pride").is_ok());
    }

    #[test]
    fn lose_after_max_turns() {
        let mut g = game("apple", Difficulty::Normal);
        for (i, word) in ["crane", "touch", "dizzy", "grime", "bloat"].iter().enumerate() {
            assert_eq!(
                g.guess(word),
                Ok(TurnOutcome::InProgress {
                    remaining: MAX_TURNS - i - 1
                })
            );
        }
        assert_eq!(
            g.guess("shirt"),
            Ok(TurnOutcome::Lost {
                secret: Word::new("apple").unwrap()
            })
        );
        assert!(g.is_finished());
    }

    #[test]
    fn alphabet_and_candidates_follow_history() {
        let mut g = game("maple", Difficulty::Normal);
        g.guess("funky").unwrap();
        g.guess("plane").unwrap();

        assert_eq!(g.history().last().unwrap().to_string(), "pla.E");
        assert_eq!(g.alphabet().to_string(), "AbcdE.ghij.Lm.oPqrst.vwx.z");

        let texts: Vec<&str> = g.candidates(20).iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["ample", "apple", "lapse", "maple"]);
        assert_eq!(g.candidates(1).len(), 1);
    }

    #[test]
    fn custom_turn_limit() {
        let mut config = GameConfig::new(Difficulty::Easy);
        config.max_turns = 1;
        let mut g = Game::new(Word::new("apple").unwrap(), WordList::embedded(), config);
        assert!(matches!(g.guess("crane"), Ok(TurnOutcome::Lost { .. })));
    }
}
