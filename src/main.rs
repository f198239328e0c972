//! Wordle Rules - CLI
//!
//! Play Wordle in the terminal, or query the rule engine directly.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::borrow::Cow;
use wordle_rules::{
    commands::{
        PlayConfig, SolutionsConfig, check_hard, evaluate_words, find_words, lookup_word, run_play,
    },
    game::{Difficulty, MAX_TURNS},
    output::{
        print_evaluation_result, print_hard_check_result, print_lookup_result,
        print_solutions_result,
    },
    wordlists::{WordList, loader::load_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_rules",
    about = "Wordle game and rule engine: feedback, hard mode and solution finding",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Dictionary index of the secret word (random if omitted)
        #[arg(short = 'i', long)]
        secret_index: Option<usize>,

        /// Difficulty: easy, normal (default) or hard (also 0, 1, 2)
        #[arg(short, long, default_value = "normal")]
        difficulty: Difficulty,

        /// Number of guesses allowed
        #[arg(short = 't', long, default_value_t = MAX_TURNS)]
        turns: usize,
    },

    /// Show the feedback a guess receives against a secret
    Evaluate {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// List dictionary words consistent with previous guesses
    Solutions {
        /// Previous guesses as GUESS:RESULT (e.g. plane:pla.E)
        history: Vec<String>,

        /// Maximum number of words to list
        #[arg(short = 'n', long, default_value = "20")]
        max: usize,
    },

    /// Show what previous guesses reveal about each letter
    Letters {
        /// Previous guesses as GUESS:RESULT (e.g. apple:.pp..)
        history: Vec<String>,
    },

    /// Check whether a guess is legal in hard mode
    Check {
        /// The guess to check
        guess: String,

        /// Previous guesses as GUESS:RESULT
        history: Vec<String>,
    },

    /// Find a word's index in the dictionary
    Lookup {
        /// Word to look up
        word: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Cow<'static, WordList>> {
    match wordlist {
        "embedded" => Ok(Cow::Borrowed(WordList::embedded())),
        path => Ok(Cow::Owned(load_word_list(path)?)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;

    let command = cli.command.unwrap_or(Commands::Play {
        secret_index: None,
        difficulty: Difficulty::default(),
        turns: MAX_TURNS,
    });

    match command {
        Commands::Play {
            secret_index,
            difficulty,
            turns,
        } => {
            let mut config = PlayConfig::new(difficulty);
            config.secret_index = secret_index;
            config.max_turns = turns.max(1);
            run_play(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Evaluate { secret, guess } => {
            let result = evaluate_words(&secret, &guess).map_err(|e| anyhow::anyhow!(e))?;
            print_evaluation_result(&result);
            Ok(())
        }
        Commands::Solutions { history, max } => {
            let config = SolutionsConfig { max_solutions: max };
            let result =
                find_words(history.as_slice(), &config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solutions_result(&result);
            Ok(())
        }
        Commands::Letters { history } => run_letters_command(&history, &dictionary),
        Commands::Check { guess, history } => {
            let result = check_hard(&guess, history.as_slice()).map_err(|e| anyhow::anyhow!(e))?;
            print_hard_check_result(&result);
            Ok(())
        }
        Commands::Lookup { word } => {
            let result = lookup_word(&word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_lookup_result(&result);
            Ok(())
        }
    }
}

fn run_letters_command(history: &[String], dictionary: &WordList) -> Result<()> {
    use wordle_rules::commands::parse_history;
    use wordle_rules::output::formatters::alphabet_line;
    use wordle_rules::rules::compute_status;

    let history =
        parse_history(history, dictionary.word_length()).map_err(|e| anyhow::anyhow!(e))?;
    println!("\n  {}", alphabet_line(&compute_status(&history)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_is_borrowed() {
        let dictionary = load_dictionary("embedded").unwrap();
        assert!(matches!(dictionary, Cow::Borrowed(_)));
        assert!(std::ptr::eq(&*dictionary, WordList::embedded()));
    }

    #[test]
    fn file_dictionary_is_owned() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt");
        let dictionary = load_dictionary(path).unwrap();
        assert!(matches!(dictionary, Cow::Owned(_)));
        assert_eq!(dictionary.len(), WordList::embedded().len());
    }
}
