//! Display functions for command results

use super::formatters::{alphabet_line, record_tiles, word_columns};
use crate::commands::{EvaluationResult, HardCheckResult, LookupResult, SolutionsResult};
use colored::Colorize;

/// Print the feedback for one guess
pub fn print_evaluation_result(result: &EvaluationResult) {
    let record = &result.record;
    println!(
        "\n  {} => {}  {}",
        record.guess(),
        record.to_string().bright_yellow().bold(),
        record_tiles(record)
    );
    println!("  {}", record.feedback().to_emoji());

    if result.exact {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the words consistent with a history
pub fn print_solutions_result(result: &SolutionsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    for (i, record) in result.history.iter().enumerate() {
        println!("  [{}] {} => {}  {}", i + 1, record.guess(), record, record_tiles(record));
    }
    println!("  {}", alphabet_line(&result.alphabet));
    println!("{}", "─".repeat(60).cyan());

    if result.solutions.is_empty() {
        println!(
            "\n{}",
            "❌ No words fit this feedback. Check the results you entered."
                .red()
                .bold()
        );
        return;
    }

    let shown = result.solutions.len();
    if shown < result.total {
        println!(
            "\n📋 {} possible words (showing first {shown}):",
            result.total.to_string().bright_yellow().bold()
        );
    } else {
        println!(
            "\n📋 {} possible {}:",
            result.total.to_string().bright_yellow().bold(),
            if result.total == 1 { "word" } else { "words" }
        );
    }

    let words: Vec<&str> = result.solutions.iter().map(String::as_str).collect();
    println!("{}", word_columns(&words, 8));
}

/// Print whether a guess is legal in hard mode
pub fn print_hard_check_result(result: &HardCheckResult) {
    match &result.violation {
        None => println!(
            "\n{} {} is a valid hard-mode guess",
            "✅".green(),
            result.guess.to_uppercase().bold()
        ),
        Some(violation) => println!(
            "\n{} {} is not a valid hard-mode guess: {violation}",
            "❌".red(),
            result.guess.to_uppercase().bold()
        ),
    }
}

/// Print a dictionary lookup
pub fn print_lookup_result(result: &LookupResult) {
    match result.index {
        Some(index) => println!(
            "\n{} found at index {}",
            result.word.to_uppercase().bold(),
            index.to_string().bright_yellow()
        ),
        None => println!(
            "\n{} {}",
            result.word.to_uppercase().bold(),
            "is not in the dictionary".red()
        ),
    }
}
