//! Interactive play mode
//!
//! Text-based game loop over a [`Game`] session.

use crate::core::Word;
use crate::game::{Difficulty, Game, GameConfig, MAX_TURNS, TurnOutcome};
use crate::output::formatters::{alphabet_line, record_tiles, word_columns};
use crate::wordlists::WordList;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Number of candidates shown by the `hint` command
const HINT_LIMIT: usize = 10;

/// Configuration for an interactive game
#[derive(Debug)]
pub struct PlayConfig {
    /// Dictionary index of the secret; random when `None`
    pub secret_index: Option<usize>,
    pub difficulty: Difficulty,
    pub max_turns: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            secret_index: None,
            difficulty,
            max_turns: MAX_TURNS,
        }
    }
}

/// Pick the secret word for a game
///
/// # Errors
///
/// Returns an error if `index` is outside the dictionary.
pub fn choose_secret(index: Option<usize>, dictionary: &WordList) -> Result<Word, String> {
    let index = index.unwrap_or_else(|| rand::rng().random_range(0..dictionary.len()));
    dictionary.get(index).cloned().ok_or_else(|| {
        format!(
            "Invalid word number {index}: expected 0 to {}",
            dictionary.len() - 1
        )
    })
}

/// Run an interactive game on stdin/stdout
///
/// Besides guesses, accepts `hint` (show candidates) and `quit`.
///
/// # Errors
///
/// Returns an error if the secret index is invalid or there's an I/O error.
pub fn run_play(config: &PlayConfig, dictionary: &WordList) -> Result<(), String> {
    let secret = choose_secret(config.secret_index, dictionary)?;
    let mut game_config = GameConfig::new(config.difficulty);
    game_config.max_turns = config.max_turns;
    let mut game = Game::new(secret, dictionary, game_config);

    println!(
        "\nGuess the {}-letter word in {} tries ({} mode).",
        dictionary.word_length(),
        game.config().max_turns,
        game.config().difficulty
    );
    println!("Commands: 'hint' to list candidates, 'quit' to exit\n");

    loop {
        print_board(&game);

        let prompt = format!(
            "Enter your guess #{} ({} left)",
            game.turn() + 1,
            game.remaining_turns()
        );
        let Some(input) = get_user_input(&prompt)? else {
            println!("Exiting (EOF detected)");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThe word was: {}\n", game.secret().text().to_uppercase().bold());
                return Ok(());
            }
            "hint" | "h" => {
                print_hint(&game);
                continue;
            }
            _ => {}
        }

        match game.guess(&input) {
            Ok(TurnOutcome::InProgress { .. }) => {}
            Ok(TurnOutcome::Won { turns }) => {
                print_board(&game);
                println!(
                    "\n{} The word was: {} ({} {})\n",
                    "YOU WIN!".bright_green().bold(),
                    game.secret().text().to_uppercase().bold(),
                    turns,
                    if turns == 1 { "guess" } else { "guesses" }
                );
                return Ok(());
            }
            Ok(TurnOutcome::Lost { secret }) => {
                print_board(&game);
                println!(
                    "\n{} The word was: {}\n",
                    "YOU LOSE!".bright_red().bold(),
                    secret.text().to_uppercase().bold()
                );
                return Ok(());
            }
            Err(rejection) => println!("{}\n", rejection.to_string().to_uppercase().red()),
        }
    }
}

fn print_board(game: &Game<'_>) {
    println!("{}", "─".repeat(52));
    for (i, record) in game.history().iter().enumerate() {
        println!(
            "  [{}] {} => {}  {}",
            i + 1,
            record.guess(),
            record,
            record_tiles(record)
        );
    }
    println!("  {}", alphabet_line(&game.alphabet()));
}

fn print_hint(game: &Game<'_>) {
    let candidates = game.candidates(HINT_LIMIT);
    if candidates.is_empty() {
        println!("No dictionary word fits the feedback so far.\n");
        return;
    }

    let words: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    println!("Possible words (first {HINT_LIMIT}):");
    println!("{}\n", word_columns(&words, 5));
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
