//! Wordle Rules
//!
//! The rule engine for a Wordle-style game: per-letter feedback, letter status
//! across a guess history, hard-mode legality, and the dictionary words still
//! consistent with everything guessed so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_rules::core::{GuessHistory, GuessRecord, Word};
//! use wordle_rules::rules::{compute_status, find_solutions, is_valid_hard_guess};
//! use wordle_rules::wordlists::WordList;
//!
//! let secret = Word::new("maple").unwrap();
//! let mut history = GuessHistory::new();
//! history.push(GuessRecord::evaluated(&secret, Word::new("plane").unwrap()));
//!
//! assert_eq!(history.last().unwrap().to_string(), "pla.E");
//! assert!(is_valid_hard_guess(&history, &Word::new("ample").unwrap()));
//! println!("Letters: {}", compute_status(&history));
//!
//! let candidates = find_solutions(&history, WordList::embedded(), 20);
//! assert!(candidates.iter().any(|w| w.text() == "maple"));
//! ```

// Core domain types
pub mod core;

// Derived views: letter status, hard mode, solution finding
pub mod rules;

// Dictionaries
pub mod wordlists;

// Single-game session rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
