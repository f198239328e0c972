//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_evaluation_result, print_hard_check_result, print_lookup_result, print_solutions_result,
};
