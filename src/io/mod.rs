//! I/O utilities for linesum.
//!
//! Provides read-to-completion input accumulation over any [`std::io::Read`]
//! source, with a convenience wrapper for standard input.

pub mod reader;

pub use reader::{read_stdin, read_to_string_lossy};
