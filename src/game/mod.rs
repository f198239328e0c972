//! Single-game session rules
//!
//! Turn limits, difficulty levels and guess acceptance. Terminal I/O lives in
//! `commands::play`.

mod session;

pub use session::{Difficulty, Game, GameConfig, GuessRejection, MAX_TURNS, TurnOutcome};
