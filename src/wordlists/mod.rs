//! Dictionaries for Wordle games
//!
//! A [`WordList`] is an ordered, ascending, fixed-length sequence of words. It
//! is read-only once built and is passed to whatever needs it.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::fmt;
use std::sync::LazyLock;

/// Sorted dictionary of same-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

/// Error type for word sequences that can't form a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    MixedLengths {
        index: usize,
        expected: usize,
        actual: usize,
    },
    Unsorted { index: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty"),
            Self::MixedLengths {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Word {index} has {actual} letters, expected {expected}"
            ),
            Self::Unsorted { index } => {
                write!(f, "Word {index} is not in strictly ascending order")
            }
        }
    }
}

impl std::error::Error for WordListError {}

static EMBEDDED: LazyLock<WordList> = LazyLock::new(|| WordList {
    words: loader::words_from_slice(WORDS),
});

impl WordList {
    /// Build a dictionary from words already in ascending order
    ///
    /// # Errors
    /// Returns `WordListError` if the list is empty, mixes word lengths, or is
    /// not strictly ascending (duplicates count as unsorted).
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        let Some(first) = words.first() else {
            return Err(WordListError::Empty);
        };
        let expected = first.len();

        for (index, word) in words.iter().enumerate() {
            if word.len() != expected {
                return Err(WordListError::MixedLengths {
                    index,
                    expected,
                    actual: word.len(),
                });
            }
        }

        if let Some(index) = words.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(WordListError::Unsorted { index: index + 1 });
        }

        Ok(Self { words })
    }

    /// Build a dictionary from words in any order, dropping duplicates
    ///
    /// # Errors
    /// Returns `WordListError` if the list is empty or mixes word lengths.
    pub fn from_unsorted(mut words: Vec<Word>) -> Result<Self, WordListError> {
        words.sort_unstable();
        words.dedup();
        Self::new(words)
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Find the index of `word` by binary search
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Word;
    /// use wordle_rules::wordlists::WordList;
    ///
    /// let list = WordList::from_unsorted(
    ///     ["hello", "hurry", "goody"].iter().map(|s| Word::new(*s).unwrap()).collect(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(list.locate("goody"), Some(0));
    /// assert_eq!(list.locate("hurry"), Some(2));
    /// assert_eq!(list.locate("zebra"), None);
    /// ```
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<usize> {
        self.words.binary_search_by(|w| w.text().cmp(word)).ok()
    }

    /// Whether `word` is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.locate(word.text()).is_some()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list can't be built
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word in the list
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words[0].len()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_sorted_and_complete() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert_eq!(list.word_length(), 5);
        assert!(WordList::new(list.words().to_vec()).is_ok());
    }

    #[test]
    fn locate_in_embedded_list() {
        let list = WordList::embedded();
        let index = list.locate("apple").unwrap();
        assert_eq!(list.get(index).unwrap().text(), "apple");
        assert_eq!(list.locate("aback"), Some(0));
        assert_eq!(list.locate("zzzzz"), None);
        assert_eq!(list.locate("appl"), None);
    }

    #[test]
    fn new_rejects_bad_lists() {
        assert_eq!(WordList::new(Vec::new()), Err(WordListError::Empty));
        assert_eq!(
            WordList::new(words(&["hello", "goodbye"])),
            Err(WordListError::MixedLengths {
                index: 1,
                expected: 5,
                actual: 7
            })
        );
        assert_eq!(
            WordList::new(words(&["hello", "apple", "zebra"])),
            Err(WordListError::Unsorted { index: 1 })
        );
        assert_eq!(
            WordList::new(words(&["apple", "apple"])),
            Err(WordListError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn from_unsorted_sorts_and_dedups() {
        let list = WordList::from_unsorted(words(&["hurry", "hello", "goody", "hello"])).unwrap();
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["goody", "hello", "hurry"]);
    }

    #[test]
    fn locate_every_word() {
        let list = WordList::from_unsorted(words(&["goodbye", "hellooo", "hurrays"])).unwrap();
        for (i, word) in list.iter().enumerate() {
            assert_eq!(list.locate(word.text()), Some(i));
            assert!(list.contains(word));
        }
    }
}
