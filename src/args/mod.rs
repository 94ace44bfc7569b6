//! Command-line argument parsing and the non-interactive print mode.

pub mod definition;
pub mod print;

pub use definition::{Args, determine_log_level};
pub use print::{print_page, run_print};
