//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or embedded constants.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary files that can't be used
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Invalid(WordListError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Invalid(e) => write!(f, "Invalid word list: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<WordListError> for LoadError {
    fn from(e: WordListError) -> Self {
        Self::Invalid(e)
    }
}

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries. Order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Load a dictionary file, sorting it and dropping duplicates
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or `LoadError::Invalid`
/// if it holds no valid words or mixes word lengths.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordlists::loader::load_word_list;
///
/// let list = load_word_list("data/words.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let words = load_from_file(path)?;
    Ok(WordList::from_unsorted(words)?)
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::loader::words_from_slice;
/// use wordle_rules::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
