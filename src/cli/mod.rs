//! CLI layer for linesum.
//!
//! Provides the command-line interface using clap, output formatting, and
//! the summation pipeline driven by the binary.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::{OutputFormat, format_error, format_sum};
pub use parser::Cli;
