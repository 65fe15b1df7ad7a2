//! Core domain models for linesum.
//!
//! This module contains the summation domain: parsed terms with
//! sentinel-propagating arithmetic, and the first-line tokenization
//! pipeline. These are pure functions and value types with no I/O
//! dependencies.

pub mod line;
pub mod term;

pub use line::{first_line, sum_first_line, tokenize};
pub use term::Term;
