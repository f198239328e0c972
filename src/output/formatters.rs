//! Formatting utilities for terminal output

use crate::core::{GuessRecord, Mark};
use crate::rules::{AlphabetStatus, LetterStatus};
use colored::{ColoredString, Colorize};

/// Color one uppercase letter tile by its mark
fn tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Format a guess as colored letter tiles
#[must_use]
pub fn record_tiles(record: &GuessRecord) -> String {
    record
        .positions()
        .map(|(_, letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// Format the alphabet string with confirmed letters highlighted
#[must_use]
pub fn alphabet_line(alphabet: &AlphabetStatus) -> String {
    alphabet
        .iter()
        .map(|(letter, status)| {
            let ch = char::from(letter);
            match status {
                LetterStatus::Unknown => ch.to_string().normal().to_string(),
                LetterStatus::Confirmed => ch.to_ascii_uppercase().to_string().green().bold().to_string(),
                LetterStatus::Eliminated => ".".bright_black().to_string(),
            }
        })
        .collect()
}

/// Format a list of words in rows of `per_row`
#[must_use]
pub fn word_columns(words: &[&str], per_row: usize) -> String {
    words
        .chunks(per_row.max(1))
        .map(|row| format!("  {}", row.join("  ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessHistory;
    use crate::rules::compute_status;

    #[test]
    fn record_tiles_plain() {
        colored::control::set_override(false);
        let record: GuessRecord = "paper:paPe.".parse().unwrap();
        assert_eq!(record_tiles(&record), " P  A  P  E  R ");
    }

    #[test]
    fn alphabet_line_plain() {
        colored::control::set_override(false);
        let history: GuessHistory = ["apple:.pp..", "touch:.OUCH"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(
            alphabet_line(&compute_status(&history)),
            ".bCd.fgHijk.mnOPqrs.Uvwxyz"
        );
    }

    #[test]
    fn word_columns_wraps() {
        let words = ["ample", "apple", "lapse", "maple", "sable"];
        assert_eq!(
            word_columns(&words, 2),
            "  ample  apple\n  lapse  maple\n  sable"
        );
        assert_eq!(word_columns(&[], 4), "");
    }
}
