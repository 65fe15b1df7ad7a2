//! # linesum-rs
//!
//! First-line summation filter.
//!
//! Reads all of standard input, sums the space-separated integers on the
//! first line, and prints the sum twice to standard output. Lines after the
//! first are read but never affect the result.
//!
//! ## Behavior
//!
//! - **Lenient parsing**: a token contributes its leading digit run
//!   (optionally signed); trailing garbage is ignored.
//! - **Sentinel propagation**: a token with no leading numeric content
//!   poisons the running sum, and the output is the literal text `NaN`.
//! - **Duplicate output**: the rendered sum is emitted as two identical
//!   lines; this is part of the contract, not an accident.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Term, first_line, sum_first_line, tokenize};

// Re-export I/O helpers
pub use io::{read_stdin, read_to_string_lossy};

// Re-export CLI types
pub use cli::{Cli, OutputFormat, execute};
